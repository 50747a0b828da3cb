mod config;
mod error;
mod prompt;
mod runner;
mod screen;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use rand::Rng;
use tictacgo_common::config::{ConfigError, Validate};
use tictacgo_common::games::tictacgo::{GameLogic, Grid, Player, load_snapshot_file};
use tictacgo_common::{log, logger};

use config::{CONFIG_FILE_NAME, Config, FirstPlayerMode, get_config_manager};
use error::CliError;
use prompt::ask_name;
use runner::{RunnerOptions, run_match};

#[derive(Parser)]
#[command(name = "tictacgo", about = "Three in a row for two players on one terminal")]
struct Args {
    /// YAML config file, created with defaults by --save-config
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Start from a JSON board snapshot instead of an empty board
    #[arg(long)]
    board: Option<PathBuf>,

    /// Ask for player names before the match
    #[arg(long)]
    ask_names: bool,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let manager = get_config_manager(&args.config);
    let mut config = manager.get_config()?;
    apply_overrides(&mut config, &args)?;

    if args.verbose || config.verbose {
        let prefix = args.use_log_prefix.then(|| "TicTacGo".to_string());
        logger::init_logger(prefix);
    }
    log!("Using config {}", args.config.display());

    if args.save_config {
        manager.set_config(&config)?;
        log!("Config saved to {}", args.config.display());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let (player1, player2) = choose_players(&config, &args, &mut input, &mut out)?;

    let grid = match &args.board {
        Some(path) => {
            log!("Loading board from {}", path.display());
            load_snapshot_file(path)?
        }
        None => Grid::new(config.board.width, config.board.height)?,
    };
    let board = Rc::new(RefCell::new(grid));
    let mut logic = GameLogic::new(board.clone(), player1, player2)?;

    let options = RunnerOptions {
        clear_screen: config.clear_screen,
    };
    let outcome = run_match(&board, &mut logic, &mut input, &mut out, &options)?;
    log!("Match finished: {:?}", outcome);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) -> Result<(), CliError> {
    if let Some(width) = args.width {
        config.board.width = width;
    }
    if let Some(height) = args.height {
        config.board.height = height;
    }
    config.validate().map_err(ConfigError::Validation)?;
    Ok(())
}

fn choose_players<R: BufRead, W: Write>(
    config: &Config,
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> Result<(Player, Player), CliError> {
    let mut first = config.player_one.to_player();
    let mut second = config.player_two.to_player();

    if args.ask_names {
        first.name = ask_name(input, out, first.symbol.as_str(), &first.name)?;
        second.name = ask_name(input, out, second.symbol.as_str(), &second.name)?;
    }

    if config.first_player == FirstPlayerMode::Random && rand::rng().random_bool(0.5) {
        std::mem::swap(&mut first, &mut second);
    }
    Ok((first, second))
}
