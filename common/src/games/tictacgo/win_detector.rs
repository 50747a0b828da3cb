use crate::identifiers::Symbol;

use super::board::{Board, Cell};
use super::types::{Direction, Position, WIN_LENGTH, WinningLine};

/// Run-length counter shared by every scan direction.
struct Streak {
    cell: Cell,
    len: usize,
    start: Position,
}

impl Streak {
    fn new() -> Self {
        Self {
            cell: None,
            len: 0,
            start: Position::new(0, 0),
        }
    }

    /// Feeds the next field of a line. Empty fields break the run, a different
    /// symbol starts a new one.
    fn push(&mut self, position: Position, cell: Cell) -> Option<WinningLine> {
        let Some(symbol) = cell else {
            *self = Self::new();
            return None;
        };

        if self.cell.as_ref() == Some(&symbol) {
            self.len += 1;
        } else {
            self.len = 1;
            self.start = position;
            self.cell = Some(symbol.clone());
        }

        if self.len == WIN_LENGTH {
            return Some(WinningLine::new(symbol, self.start, position));
        }
        None
    }
}

type Owned<'a> = &'a dyn Fn(&Symbol) -> bool;

fn any_symbol(_: &Symbol) -> bool {
    true
}

// Runs of symbols rejected by `owned` are skipped, the scan goes on.
fn scan_line(fields: impl IntoIterator<Item = (Position, Cell)>, owned: Owned) -> Option<WinningLine> {
    let mut streak = Streak::new();
    fields
        .into_iter()
        .find_map(|(position, cell)| streak.push(position, cell).filter(|line| owned(&line.symbol)))
}

// Callers only pass coordinates taken from the board's own dimensions.
fn field<B: Board + ?Sized>(board: &B, x: usize, y: usize) -> (Position, Cell) {
    (Position::new(x, y), board.get(x, y).ok().flatten())
}

/// Checks horizontal, vertical and diagonal lines in that order and returns the
/// first complete run found.
pub fn check_win<B: Board + ?Sized>(board: &B) -> Option<WinningLine> {
    check_win_owned_by(board, &any_symbol)
}

/// Like [`check_win`], but only runs of symbols accepted by `owned` count.
/// Lines of any other symbol are passed over.
pub fn check_win_owned_by<B: Board + ?Sized>(board: &B, owned: Owned) -> Option<WinningLine> {
    horizontal(board, owned)
        .or_else(|| vertical(board, owned))
        .or_else(|| diagonal(board, owned))
}

pub fn check_horizontally<B: Board + ?Sized>(board: &B) -> Option<WinningLine> {
    horizontal(board, &any_symbol)
}

pub fn check_vertically<B: Board + ?Sized>(board: &B) -> Option<WinningLine> {
    vertical(board, &any_symbol)
}

/// Every field is used as the start of both diagonals, so longer diagonals are
/// scanned more than once.
pub fn check_diagonally<B: Board + ?Sized>(board: &B) -> Option<WinningLine> {
    diagonal(board, &any_symbol)
}

fn horizontal<B: Board + ?Sized>(board: &B, owned: Owned) -> Option<WinningLine> {
    (0..board.height()).find_map(|y| scan_line((0..board.width()).map(|x| field(board, x, y)), owned))
}

fn vertical<B: Board + ?Sized>(board: &B, owned: Owned) -> Option<WinningLine> {
    (0..board.width()).find_map(|x| scan_line((0..board.height()).map(|y| field(board, x, y)), owned))
}

fn diagonal<B: Board + ?Sized>(board: &B, owned: Owned) -> Option<WinningLine> {
    for y in 0..board.height() {
        for x in 0..board.width() {
            for direction in [Direction::LeftRight, Direction::RightLeft] {
                if let Some(line) = scan_line(get_diagonal(board, x, y, direction), owned) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Fields from `(x, y)` downwards to the board edge in the given direction.
pub fn get_diagonal<B: Board + ?Sized>(
    board: &B,
    x: usize,
    y: usize,
    direction: Direction,
) -> Vec<(Position, Cell)> {
    let mut fields = Vec::new();
    let (mut cx, mut cy) = (x, y);
    while cx < board.width() && cy < board.height() {
        fields.push(field(board, cx, cy));
        cy += 1;
        match direction {
            Direction::LeftRight => cx += 1,
            Direction::RightLeft => match cx.checked_sub(1) {
                Some(next) => cx = next,
                None => break,
            },
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictacgo::Grid;

    fn symbols(fields: &[(Position, Cell)]) -> Vec<&str> {
        fields
            .iter()
            .map(|(_, cell)| cell.as_ref().map_or("", |s| s.as_str()))
            .collect()
    }

    fn line(symbol: &str, start: (usize, usize), end: (usize, usize)) -> Option<WinningLine> {
        Some(WinningLine::new(
            Symbol::from(symbol),
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        ))
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(check_win(&grid), None);
    }

    #[test]
    fn test_horizontal_line() {
        let grid = Grid::from_rows(&[&["o", "o", "o"], &["x", "", ""], &["x", "", ""]]);
        assert_eq!(check_horizontally(&grid), line("o", (0, 0), (2, 0)));
    }

    #[test]
    fn test_horizontal_run_does_not_wrap_rows() {
        let grid = Grid::from_rows(&[&["", "o", "o"], &["o", "", ""], &["", "", ""]]);
        assert_eq!(check_horizontally(&grid), None);
    }

    #[test]
    fn test_horizontal_run_found_mid_row() {
        let grid = Grid::from_rows(&[&["x", "o", "o", "o", "x"]]);
        assert_eq!(check_horizontally(&grid), line("o", (1, 0), (3, 0)));
    }

    #[test]
    fn test_horizontal_build_up() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, Symbol::from("o")).unwrap();
        assert_eq!(check_horizontally(&grid), None);
        grid.set(0, 1, Symbol::from("x")).unwrap();
        grid.set(1, 0, Symbol::from("o")).unwrap();
        assert_eq!(check_horizontally(&grid), None);
        grid.set(1, 1, Symbol::from("x")).unwrap();
        assert_eq!(check_horizontally(&grid), None);
        grid.set(2, 0, Symbol::from("o")).unwrap();
        assert_eq!(check_horizontally(&grid), line("o", (0, 0), (2, 0)));
    }

    #[test]
    fn test_vertical_line() {
        let grid = Grid::from_rows(&[&["o", "x", ""], &["o", "x", ""], &["o", "", ""]]);
        assert_eq!(check_vertically(&grid), line("o", (0, 0), (0, 2)));
        assert_eq!(check_horizontally(&grid), None);
    }

    #[test]
    fn test_vertical_run_does_not_wrap_columns() {
        let grid = Grid::from_rows(&[&["", "x"], &["", ""], &["x", ""], &["x", ""]]);
        assert_eq!(check_vertically(&grid), None);
    }

    #[test]
    fn test_empty_fields_break_a_run() {
        let grid = Grid::from_rows(&[&["o", "o", "", "o", "x"]]);
        assert_eq!(check_horizontally(&grid), None);
    }

    #[test]
    fn test_diagonal_left_right() {
        let grid = Grid::from_rows(&[&["o", "x", "o"], &["x", "o", "x"], &["x", "o", "o"]]);
        assert_eq!(check_diagonally(&grid), line("o", (0, 0), (2, 2)));
    }

    #[test]
    fn test_diagonal_right_left() {
        let grid = Grid::from_rows(&[&["o", "x", "o"], &["x", "o", "x"], &["o", "o", "x"]]);
        assert_eq!(check_diagonally(&grid), line("o", (2, 0), (0, 2)));
    }

    #[test]
    fn test_diagonal_run_inside_longer_diagonal() {
        let grid = Grid::from_rows(&[
            &["x", "", "", ""],
            &["", "o", "", ""],
            &["", "", "o", ""],
            &["", "", "", "o"],
        ]);
        assert_eq!(check_diagonally(&grid), line("o", (1, 1), (3, 3)));
    }

    #[test]
    fn test_run_of_three_followed_by_other_symbol() {
        let grid = Grid::from_rows(&[
            &["o", "", "", ""],
            &["", "o", "", ""],
            &["", "", "o", ""],
            &["", "", "", "x"],
        ]);
        assert_eq!(check_diagonally(&grid), line("o", (0, 0), (2, 2)));
    }

    #[test]
    fn test_get_diagonal_left_right() {
        let grid = Grid::from_rows(&[&["o", "x", "o"], &["x", "o", "x"], &["x", "o", "o"]]);
        assert_eq!(symbols(&get_diagonal(&grid, 0, 0, Direction::LeftRight)), vec!["o", "o", "o"]);
        assert_eq!(symbols(&get_diagonal(&grid, 0, 1, Direction::LeftRight)), vec!["x", "o"]);
        assert_eq!(symbols(&get_diagonal(&grid, 1, 0, Direction::LeftRight)), vec!["x", "x"]);
    }

    #[test]
    fn test_get_diagonal_right_left() {
        let grid = Grid::from_rows(&[&["o", "x", "o"], &["x", "o", "x"], &["o", "o", "x"]]);
        assert_eq!(symbols(&get_diagonal(&grid, 2, 0, Direction::RightLeft)), vec!["o", "o", "o"]);
        assert_eq!(symbols(&get_diagonal(&grid, 1, 0, Direction::RightLeft)), vec!["x", "x"]);
        assert_eq!(symbols(&get_diagonal(&grid, 2, 1, Direction::RightLeft)), vec!["x", "o"]);
        assert_eq!(symbols(&get_diagonal(&grid, 0, 0, Direction::RightLeft)), vec!["o"]);
    }

    #[test]
    fn test_get_diagonal_positions_follow_direction() {
        let grid = Grid::new(3, 3).unwrap();
        let positions: Vec<Position> = get_diagonal(&grid, 2, 1, Direction::RightLeft)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(positions, vec![Position::new(2, 1), Position::new(1, 2)]);
    }

    #[test]
    fn test_full_board_without_line() {
        let grid = Grid::from_rows(&[&["o", "x", "x"], &["x", "o", "o"], &["o", "x", "x"]]);
        assert_eq!(check_win(&grid), None);
    }

    #[test]
    fn test_horizontal_reported_before_vertical() {
        let grid = Grid::from_rows(&[&["x", "", ""], &["x", "", ""], &["x", "o", "o"], &["", "", "o"]]);
        assert_eq!(check_win(&grid), line("x", (0, 0), (0, 2)));

        let grid = Grid::from_rows(&[&["x", "", ""], &["x", "", ""], &["x", "", ""], &["o", "o", "o"]]);
        assert_eq!(check_win(&grid), line("o", (0, 3), (2, 3)));
    }

    #[test]
    fn test_owned_scan_passes_over_foreign_runs() {
        let grid = Grid::from_rows(&[&["z", "z", "z"], &["o", "", ""], &["o", "", ""], &["o", "", ""]]);
        let owned = |symbol: &Symbol| symbol.as_str() == "o" || symbol.as_str() == "x";

        assert_eq!(check_win(&grid), line("z", (0, 0), (2, 0)));
        assert_eq!(check_win_owned_by(&grid, &owned), line("o", (0, 1), (0, 3)));
    }

    #[test]
    fn test_owned_scan_continues_within_the_same_row() {
        let grid = Grid::from_rows(&[&["z", "z", "z", "x", "x", "x"]]);
        let owned = |symbol: &Symbol| symbol.as_str() == "x";
        assert_eq!(check_win_owned_by(&grid, &owned), line("x", (3, 0), (5, 0)));
    }
}
