use std::io::{BufRead, Write};

use tictacgo_common::games::tictacgo::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Quit,
}

/// Accepts `x y`, `x,y` or `q`/`quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [x, y] = parts.as_slice() else {
        return Err(format!("Expected two coordinates like \"1 2\", got {:?}", trimmed));
    };

    let x = x
        .parse::<usize>()
        .map_err(|_| format!("{:?} is not a column number", x))?;
    let y = y
        .parse::<usize>()
        .map_err(|_| format!("{:?} is not a row number", y))?;
    Ok(Command::Place(Position::new(x, y)))
}

/// Prints `question` and reads one line. `None` once input is exhausted.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> std::io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks for a player name, keeping `default` on an empty answer.
pub fn ask_name<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    symbol: &str,
    default: &str,
) -> std::io::Result<String> {
    let answer = ask(input, out, &format!("Name for player {} [{}]: ", symbol, default))?;
    Ok(match answer {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => default.to_string(),
    })
}
