//! Calendar Puzzle Solver Library
//!
//! Solves "a puzzle a day" calendar puzzles: polyomino pieces must tile an
//! irregular board so that every cell is covered except the ones showing the
//! requested month, day, and weekday. The crate provides the board models,
//! piece catalogs, the backtracking exact-cover search engine, and the
//! stable textual encoding consumed by external renderers.

pub mod board;
pub mod config;
pub mod encode;
pub mod geometry;
pub mod pieces;
pub mod solver;

use config::{resolve, ConfigError, PuzzleKind};

/// Resolves a date request, runs the solver, and encodes the result.
///
/// This is the boundary operation hosts call: `Ok(Some(text))` carries the
/// encoded board, `Ok(None)` reports that no tiling exists for the request
/// (callers may suggest retrying with `allow_flip`, which can only enlarge
/// the search space), and `Err` reports an invalid request.
pub fn find_solution(
    month: u8,
    day: u8,
    weekday: u8,
    kind: PuzzleKind,
    allow_flip: bool,
) -> Result<Option<String>, ConfigError> {
    let puzzle = resolve(kind, month, day, weekday, allow_flip)?;
    let solution = puzzle.solve()?;
    Ok(solution.map(|solution| puzzle.encode(&solution)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellKind;

    /// Splits encoded text into the per-cell token grid.
    fn tokens(text: &str) -> Vec<Vec<String>> {
        text.lines()
            .map(|line| line.split(' ').map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn weekday_date_has_a_solution() {
        let text = find_solution(5, 17, 2, PuzzleKind::Weekday, true)
            .unwrap()
            .expect("May 17, Tuesday is solvable");

        let grid = tokens(&text);
        assert_eq!(grid.len(), 8);
        assert!(grid.iter().all(|row| row.len() == 7));

        // exactly one exposed cell per target kind, at the right position
        let board = board::Board::weekday();
        for (token, kind) in [
            ("M", CellKind::Month(5)),
            ("D", CellKind::Day(17)),
            ("W", CellKind::Weekday(2)),
        ] {
            let positions: Vec<usize> = (0..board.cell_count())
                .filter(|&idx| grid[idx / 7][idx % 7] == token)
                .collect();
            assert_eq!(positions, vec![board.find_slot(kind).unwrap()]);
        }
    }

    #[test]
    fn month_day_date_has_a_solution() {
        let text = find_solution(1, 1, 0, PuzzleKind::MonthDay, true)
            .unwrap()
            .expect("Jan 1 is solvable");
        let grid = tokens(&text);
        assert_eq!(grid.len(), 7);
        assert!(grid.iter().all(|row| row.len() == 7));
    }

    /// Every playable non-target cell carries a piece id, walls carry `#`,
    /// and piece ids cover exactly their piece's area.
    #[test]
    fn solution_is_an_exact_cover() {
        let puzzle = resolve(PuzzleKind::Weekday, 5, 17, 2, true).unwrap();
        let solution = puzzle.solve().unwrap().unwrap();

        let covered: usize = solution.iter().map(|p| p.cells().len()).sum();
        assert_eq!(covered, puzzle.board().playable_count() - 3);

        let mut seen = vec![false; puzzle.board().cell_count()];
        for placed in &solution {
            for &cell in placed.cells() {
                assert!(!seen[cell as usize], "cell {cell} covered twice");
                seen[cell as usize] = true;
                assert!(puzzle.board().kind(cell as usize).is_playable());
                assert!(!puzzle.targets().contains(&(cell as usize)));
            }
        }
    }

    #[test]
    fn repeated_solves_are_byte_identical() {
        let first = find_solution(5, 17, 2, PuzzleKind::Weekday, true).unwrap();
        let second = find_solution(5, 17, 2, PuzzleKind::Weekday, true).unwrap();
        assert_eq!(first, second);
    }

    /// The rotation-only orientation sets are subsets of the flip-enabled
    /// ones, so enabling flips can never lose a solution.
    #[test]
    fn flipping_never_removes_a_solution() {
        let without = find_solution(5, 17, 2, PuzzleKind::Weekday, false).unwrap();
        let with = find_solution(5, 17, 2, PuzzleKind::Weekday, true).unwrap();
        if without.is_some() {
            assert!(with.is_some());
        }
    }

    #[test]
    fn invalid_request_fails_before_searching() {
        let err = find_solution(5, 32, 2, PuzzleKind::Weekday, true).unwrap_err();
        assert_eq!(err, ConfigError::DayOutOfRange(32));
    }
}
