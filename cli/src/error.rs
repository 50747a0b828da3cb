use tictacgo_common::config::ConfigError;
use tictacgo_common::games::tictacgo::{BoardError, LogicError, SnapshotError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("cannot start match: {0}")]
    Logic(#[from] LogicError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("no player is able to move on this board")]
    NoActivePlayer,
}
