use crate::identifiers::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("snapshot shape mismatch: {0}")]
    SnapshotShape(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    #[error("you must supply two different players, got {0} twice")]
    DuplicatePlayer(String),

    #[error("the two players must not share the symbol {0}")]
    DuplicateSymbol(Symbol),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot board: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = BoardError::OutOfRange {
            x: 3,
            y: 0,
            width: 3,
            height: 4,
        };
        assert_eq!(err.to_string(), "position (3, 0) is outside the 3x4 board");
    }

    #[test]
    fn test_duplicate_symbol_display() {
        let err = LogicError::DuplicateSymbol(Symbol::from("o"));
        assert_eq!(err.to_string(), "the two players must not share the symbol o");
    }

    #[test]
    fn test_snapshot_error_wraps_board_error() {
        let err = SnapshotError::from(BoardError::InvalidDimensions { width: 0, height: 3 });
        assert_eq!(
            err.to_string(),
            "invalid snapshot board: invalid board dimensions 0x3: both must be positive"
        );
    }
}
