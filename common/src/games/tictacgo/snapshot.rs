use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::identifiers::Symbol;

use super::board::{Board, Cell};
use super::error::{BoardError, SnapshotError};
use super::grid::Grid;

/// Serialized board: rows top to bottom, `""` for an empty field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(rename = "Board")]
    pub board: Vec<Vec<String>>,
    #[serde(rename = "Width")]
    pub width: usize,
    #[serde(rename = "Height")]
    pub height: usize,
}

impl Grid {
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        if snapshot.board.len() != snapshot.height {
            return Err(BoardError::SnapshotShape(format!(
                "Height is {} but the board has {} rows",
                snapshot.height,
                snapshot.board.len()
            )));
        }
        if let Some((y, row)) = snapshot
            .board
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != snapshot.width)
        {
            return Err(BoardError::SnapshotShape(format!(
                "Width is {} but row {} has {} fields",
                snapshot.width,
                y,
                row.len()
            )));
        }

        let cells: Vec<Cell> = snapshot
            .board
            .iter()
            .flatten()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(Symbol::from(field.as_str()))
                }
            })
            .collect();

        Grid::from_cells(snapshot.width, snapshot.height, cells)
    }

    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.as_ref().map(|s| s.to_string()).unwrap_or_default())
                        .collect()
                })
                .collect(),
            width: self.width(),
            height: self.height(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[&str]]) -> Self {
        let snapshot = BoardSnapshot {
            board: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
            width: rows.first().map_or(0, |row| row.len()),
            height: rows.len(),
        };
        Grid::from_snapshot(&snapshot).expect("test rows must form a rectangle")
    }
}

pub fn load_snapshot(json: &str) -> Result<Grid, SnapshotError> {
    let snapshot: BoardSnapshot = serde_json::from_str(json)?;
    Ok(Grid::from_snapshot(&snapshot)?)
}

pub fn load_snapshot_file(path: &Path) -> Result<Grid, SnapshotError> {
    let content = std::fs::read_to_string(path)?;
    load_snapshot(&content)
}

pub fn snapshot_to_json(grid: &Grid) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&grid.to_snapshot())?)
}
