use serde::{Deserialize, Serialize};

use crate::identifiers::Symbol;

/// Length of the run that wins the game.
pub const WIN_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Per-player bookkeeping kept by [`GameLogic`](super::GameLogic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub moves_made: usize,
    /// Fixed turn-order slot assigned at construction.
    pub turn: usize,
}

/// A move a player wants to make. Only used to ask whether it is legal;
/// applying it is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Place(Position),
    Remove(Position),
    Move { from: Position, to: Position },
}

/// Diagonal scan direction, both going downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards increasing `x`.
    LeftRight,
    /// Towards decreasing `x`.
    RightLeft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub symbol: Symbol,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(symbol: Symbol, start: Position, end: Position) -> Self {
        Self { symbol, start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}
