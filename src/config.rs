//! Request validation and puzzle resolution.
//!
//! Maps a (puzzle type, month, day, weekday, allow-flip) request to a
//! ready-to-solve bundle, keeping all calendar semantics out of the search
//! engine. Invalid requests are configuration errors, reported distinctly
//! from the solver's ordinary "no solution" outcome so callers never suggest
//! flipping pieces to fix a bad request.

use thiserror::Error;

use crate::board::{Board, CellKind};
use crate::encode::encode;
use crate::pieces::{Piece, MONTH_DAY_PIECES, WEEKDAY_PIECES};
use crate::solver::{solve, Solution, SolveError};

/// The supported board variants.
///
/// Each variant yields a distinct board value, not a distinct search code
/// path; the solver never learns what the layouts mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleKind {
    /// Classic 7x7 board exposing a month and a day cell.
    MonthDay,
    /// 7x8 board additionally exposing a weekday cell.
    Weekday,
}

/// A request the engine cannot act on, as opposed to one it proves
/// infeasible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("month {0} out of range 1-12")]
    MonthOutOfRange(u8),
    #[error("day {0} out of range 1-31")]
    DayOutOfRange(u8),
    #[error("weekday {0} out of range 0-6")]
    WeekdayOutOfRange(u8),
    #[error("unknown puzzle type {0}")]
    UnknownPuzzleType(u8),
    #[error("board has no slot cell for {0:?}")]
    MissingSlot(CellKind),
    #[error(transparent)]
    Solver(#[from] SolveError),
}

impl TryFrom<u8> for PuzzleKind {
    type Error = ConfigError;

    /// Selector values from the original boundary contract: 0 is the
    /// month/day board, 3 the weekday board.
    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(PuzzleKind::MonthDay),
            3 => Ok(PuzzleKind::Weekday),
            other => Err(ConfigError::UnknownPuzzleType(other)),
        }
    }
}

/// A validated, ready-to-solve puzzle instance.
#[derive(Debug)]
pub struct Puzzle {
    board: Board,
    targets: Vec<usize>,
    pieces: &'static [Piece],
    allow_flip: bool,
}

impl Puzzle {
    /// The resolved board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Flat indices of the cells that must stay uncovered.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// The piece catalog for this board.
    pub fn pieces(&self) -> &'static [Piece] {
        self.pieces
    }

    /// Runs the search engine on this instance.
    ///
    /// `Ok(None)` means the exhaustive search proved no tiling exists for
    /// this date; it is not an error.
    pub fn solve(&self) -> Result<Option<Solution>, ConfigError> {
        Ok(solve(&self.board, &self.targets, self.pieces, self.allow_flip)?)
    }

    /// Serializes a solution of this instance for the presentation layer.
    pub fn encode(&self, solution: &Solution) -> String {
        encode(&self.board, self.pieces, solution)
    }
}

/// Validates a request and resolves it to a concrete puzzle instance.
///
/// `weekday` uses 0 for Sunday. Boards without weekday slots ignore the
/// weekday value beyond range-checking it.
pub fn resolve(
    kind: PuzzleKind,
    month: u8,
    day: u8,
    weekday: u8,
    allow_flip: bool,
) -> Result<Puzzle, ConfigError> {
    if !(1..=12).contains(&month) {
        return Err(ConfigError::MonthOutOfRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(ConfigError::DayOutOfRange(day));
    }
    if weekday > 6 {
        return Err(ConfigError::WeekdayOutOfRange(weekday));
    }

    let (board, pieces) = match kind {
        PuzzleKind::MonthDay => (Board::month_day(), MONTH_DAY_PIECES),
        PuzzleKind::Weekday => (Board::weekday(), WEEKDAY_PIECES),
    };

    let mut targets = vec![
        slot(&board, CellKind::Month(month))?,
        slot(&board, CellKind::Day(day))?,
    ];
    if kind == PuzzleKind::Weekday {
        targets.push(slot(&board, CellKind::Weekday(weekday))?);
    }

    Ok(Puzzle {
        board,
        targets,
        pieces,
        allow_flip,
    })
}

/// Locates a slot cell, turning absence into a configuration error. Absence
/// matters on boards whose day slots do not go all the way to 31.
fn slot(board: &Board, kind: CellKind) -> Result<usize, ConfigError> {
    board.find_slot(kind).ok_or(ConfigError::MissingSlot(kind))
}
