use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use tictacgo_common::games::tictacgo::{Action, Board, GameLogic, GameStatus, Grid, Player, Position};
use tictacgo_common::log;

use crate::error::CliError;
use crate::prompt::{Command, ask, parse_command};
use crate::screen::clear_screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(Player),
    Draw,
    /// Quit or input closed before the game ended.
    Aborted,
}

pub struct RunnerOptions {
    pub clear_screen: bool,
}

/// Drives one match: asks the engine whose turn it is, reads a field, checks
/// it, writes it to the board and repeats until the engine says the game is
/// over.
pub fn run_match<R: BufRead, W: Write>(
    board: &Rc<RefCell<Grid>>,
    logic: &mut GameLogic<Grid>,
    input: &mut R,
    out: &mut W,
    options: &RunnerOptions,
) -> Result<MatchOutcome, CliError> {
    while !logic.is_over() {
        logic.begin_turn();
        let player = logic.whose_turn().cloned().ok_or(CliError::NoActivePlayer)?;

        let Some(position) = read_move(board, logic, &player, input, out, options)? else {
            return Ok(MatchOutcome::Aborted);
        };

        board
            .borrow_mut()
            .set(position.x, position.y, player.symbol.clone())?;
        logic.end_turn();
    }

    if options.clear_screen {
        clear_screen(out)?;
    }
    render(board, logic, out)?;

    let outcome = match logic.status() {
        GameStatus::Won(winner) => {
            writeln!(out, "{} wins!", winner.name)?;
            MatchOutcome::Won(winner)
        }
        _ => {
            writeln!(out, "Draw, the board is full.")?;
            MatchOutcome::Draw
        }
    };
    Ok(outcome)
}

/// Prompts `player` until a legal field is entered. `None` when the player
/// quits or input runs out.
fn read_move<R: BufRead, W: Write>(
    board: &Rc<RefCell<Grid>>,
    logic: &GameLogic<Grid>,
    player: &Player,
    input: &mut R,
    out: &mut W,
    options: &RunnerOptions,
) -> Result<Option<Position>, CliError> {
    let question = format!("{} ({}), your move as \"x y\" or q to quit: ", player.name, player.symbol);
    let mut notice: Option<String> = None;

    loop {
        if options.clear_screen {
            clear_screen(out)?;
        }
        render(board, logic, out)?;
        if let Some(message) = notice.take() {
            writeln!(out, "{}", message)?;
        }

        let Some(line) = ask(input, out, &question)? else {
            writeln!(out)?;
            return Ok(None);
        };

        let position = match parse_command(&line) {
            Ok(Command::Place(position)) => position,
            Ok(Command::Quit) => {
                log!("{} quit the match", player.name);
                return Ok(None);
            }
            Err(message) => {
                notice = Some(message);
                continue;
            }
        };

        if logic.is_legal(Action::Place(position), player) {
            return Ok(Some(position));
        }
        notice = Some(format!(
            "Field ({}, {}) is taken or not on the board",
            position.x, position.y
        ));
    }
}

fn render<W: Write>(board: &Rc<RefCell<Grid>>, logic: &GameLogic<Grid>, out: &mut W) -> std::io::Result<()> {
    let players: Vec<String> = logic
        .players()
        .iter()
        .map(|p| format!("{} ({})", p.name, p.symbol))
        .collect();
    writeln!(out, "{}", players.join(" vs "))?;
    writeln!(out, "{}", board.borrow())?;
    writeln!(out, "{} moves remaining", logic.moves_remaining())
}
