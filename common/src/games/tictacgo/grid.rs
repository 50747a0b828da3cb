use std::fmt;

use super::board::{Board, Cell};
use super::error::BoardError;

/// Dense row-major board backed by a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![None; width * height],
            width,
            height,
        })
    }

    pub(super) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if cells.len() != width * height {
            return Err(BoardError::SnapshotShape(format!(
                "expected {} cells for a {}x{} board, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self { cells, width, height })
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        self.check_range(x, y)?;
        Ok(y * self.width + x)
    }
}

impl Board for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index].clone())
    }

    fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError> {
        let index = self.index(x, y)?;
        self.cells[index] = cell;
        Ok(())
    }

    fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_ref().map_or(" ", |symbol| symbol.as_str()))
                .collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
