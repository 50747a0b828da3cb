use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::identifiers::Symbol;
use crate::log;

use super::board::Board;
use super::error::LogicError;
use super::types::{Action, GameStatus, Player, PlayerStats, Position, WinningLine};
use super::win_detector::check_win_owned_by;

/// Rules for a two-player match on a board shared with the driver.
///
/// `GameLogic` only ever reads the board. The driver asks whether a move is
/// legal, applies it to the board itself and then queries the outcome. Every
/// answer is computed from the current board contents, so moves applied
/// directly to the board are picked up without notifying the logic.
pub struct GameLogic<B: Board + ?Sized> {
    board: Rc<RefCell<B>>,
    players: HashMap<Symbol, Player>,
    stats: HashMap<Symbol, PlayerStats>,
    turn: usize,
}

impl<B: Board + ?Sized> GameLogic<B> {
    /// `player1` moves first.
    pub fn new(board: Rc<RefCell<B>>, player1: Player, player2: Player) -> Result<Self, LogicError> {
        if player1 == player2 {
            return Err(LogicError::DuplicatePlayer(player1.name));
        }
        if player1.symbol == player2.symbol {
            return Err(LogicError::DuplicateSymbol(player1.symbol));
        }

        log!(
            "New match: {} ({}) vs {} ({})",
            player1.name,
            player1.symbol,
            player2.name,
            player2.symbol
        );

        let mut players = HashMap::new();
        let mut stats = HashMap::new();
        for (turn, player) in [player1, player2].into_iter().enumerate() {
            stats.insert(player.symbol.clone(), PlayerStats { moves_made: 0, turn });
            players.insert(player.symbol.clone(), player);
        }

        Ok(Self {
            board,
            players,
            stats,
            turn: 0,
        })
    }

    pub fn board(&self) -> &Rc<RefCell<B>> {
        &self.board
    }

    /// Players in turn order.
    pub fn players(&self) -> Vec<&Player> {
        let mut ordered: Vec<(&PlayerStats, &Player)> = self
            .players
            .iter()
            .filter_map(|(symbol, player)| self.stats.get(symbol).map(|stats| (stats, player)))
            .collect();
        ordered.sort_by_key(|(stats, _)| stats.turn);
        ordered.into_iter().map(|(_, player)| player).collect()
    }

    pub fn player_by_symbol(&self, symbol: &Symbol) -> Option<&Player> {
        self.players.get(symbol)
    }

    pub fn stats(&self, player: &Player) -> Option<PlayerStats> {
        self.stats.get(&player.symbol).copied()
    }

    /// Moves credited to `player` through [`end_turn`](Self::end_turn).
    pub fn moves_made(&self, player: &Player) -> Option<usize> {
        self.stats(player).map(|stats| stats.moves_made)
    }

    /// Turn counter advanced by [`end_turn`](Self::end_turn). Independent of
    /// [`whose_turn`](Self::whose_turn).
    pub fn current_turn(&self) -> usize {
        self.turn
    }

    pub fn begin_turn(&mut self) {
        if let Some(player) = self.whose_turn() {
            log!("Turn begins for {} ({})", player.name, player.symbol);
        }
    }

    pub fn end_turn(&mut self) {
        let turn = self.turn;
        if let Some(stats) = self.stats.values_mut().find(|stats| stats.turn == turn) {
            stats.moves_made += 1;
        }
        self.turn = (self.turn + 1) % self.players.len();
        log!("Turn ended, {} moves remaining", self.moves_remaining());

        let winner = self
            .winning_line()
            .and_then(|line| self.players.get(&line.symbol).map(|player| (player, line)));
        if let Some((player, line)) = winner {
            log!(
                "{} wins with a line from ({}, {}) to ({}, {})",
                player.name,
                line.start.x,
                line.start.y,
                line.end.x,
                line.end.y
            );
        }
    }

    /// Derived from how many fields are occupied: an even count means the
    /// first player is up. Only meaningful while play strictly alternates.
    pub fn whose_turn(&self) -> Option<&Player> {
        let moves_total = self.board.borrow().total_cells();
        let moves_made = moves_total - self.moves_remaining();
        let turn = moves_made % self.players.len();
        self.stats
            .iter()
            .find(|(_, stats)| stats.turn == turn)
            .and_then(|(symbol, _)| self.players.get(symbol))
    }

    /// Number of empty fields.
    pub fn moves_remaining(&self) -> usize {
        let board = self.board.borrow();
        (0..board.height())
            .flat_map(|y| (0..board.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| board.is_empty(x, y).unwrap_or(false))
            .count()
    }

    /// A completed line counts even when it fills the last field.
    pub fn is_over(&self) -> bool {
        self.get_winner().is_some() || self.moves_remaining() == 0
    }

    /// Positions outside the board are never legal.
    pub fn is_legal(&self, action: Action, player: &Player) -> bool {
        match action {
            Action::Place(at) => self.is_free(at),
            Action::Remove(at) => self.holds(at, player),
            Action::Move { from, to } => {
                self.is_legal(Action::Remove(from), player) && self.is_legal(Action::Place(to), player)
            }
        }
    }

    fn is_free(&self, at: Position) -> bool {
        self.board.borrow().is_empty(at.x, at.y).unwrap_or(false)
    }

    fn holds(&self, at: Position, player: &Player) -> bool {
        matches!(self.board.borrow().get(at.x, at.y), Ok(Some(symbol)) if symbol == player.symbol)
    }

    /// First complete line of either player in scan order: rows, then
    /// columns, then diagonals. Lines of symbols neither player uses are
    /// passed over.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_owned_by(&*self.board.borrow(), &|symbol: &Symbol| self.players.contains_key(symbol))
    }

    pub fn get_winner(&self) -> Option<&Player> {
        let line = self.winning_line()?;
        self.players.get(&line.symbol)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.get_winner() {
            return GameStatus::Won(winner.clone());
        }
        let remaining = self.moves_remaining();
        if remaining == 0 {
            GameStatus::Draw
        } else if remaining == self.board.borrow().total_cells() {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        }
    }
}
