use crate::identifiers::Symbol;

use super::error::BoardError;

/// Contents of a single field: a player's symbol or nothing.
pub type Cell = Option<Symbol>;

/// Storage contract for a rectangular game board.
///
/// A board knows nothing about the rules. It stores whatever it is told to
/// store; checking whether a write makes sense is the job of
/// [`GameLogic`](super::GameLogic). Coordinates are zero-based, `x` runs over
/// the width and `y` over the height, and dimensions never change after
/// construction.
pub trait Board {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError>;

    /// Overwrites a field unconditionally.
    fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError>;

    /// Clears every field, keeping the dimensions.
    fn reset(&mut self);

    fn total_cells(&self) -> usize {
        self.width() * self.height()
    }

    fn check_range(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if x >= self.width() || y >= self.height() {
            return Err(BoardError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.get(x, y)?.is_none())
    }

    fn set(&mut self, x: usize, y: usize, symbol: Symbol) -> Result<(), BoardError> {
        self.set_cell(x, y, Some(symbol))
    }

    fn remove(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.set_cell(x, y, None)
    }

    /// Moves whatever is at the source to the destination and clears the
    /// source. An empty source empties the destination. Nothing is written
    /// unless both positions are on the board.
    fn move_piece(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) -> Result<(), BoardError> {
        self.check_range(x2, y2)?;
        let piece = self.get(x1, y1)?;
        self.set_cell(x1, y1, None)?;
        self.set_cell(x2, y2, piece)
    }
}
