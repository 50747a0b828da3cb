//! Three-in-a-row rules engine over an abstract board.
//!
//! [`Board`] is the dumb storage contract, [`Grid`] its dense implementation,
//! and [`GameLogic`] the query-only rules layered on top of a shared board.

mod board;
mod error;
mod grid;
mod logic;
mod snapshot;
mod types;
mod win_detector;

pub use board::{Board, Cell};
pub use error::{BoardError, LogicError, SnapshotError};
pub use grid::Grid;
pub use logic::GameLogic;
pub use snapshot::{BoardSnapshot, load_snapshot, load_snapshot_file, snapshot_to_json};
pub use types::{Action, Direction, GameStatus, Player, PlayerStats, Position, WIN_LENGTH, WinningLine};
pub use win_detector::{check_diagonally, check_horizontally, check_vertically, check_win, check_win_owned_by, get_diagonal};
