//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is a set of unit square positions in the plane, normalized so
//! the minimum row and column are zero, with a stable one-character id used
//! in the encoded board text.

/// A 2D coordinate as (row, column).
pub type Coord = (i32, i32);

/// Maximum number of squares in any single piece across all catalogs.
pub const MAX_CELLS: usize = 6;

/// A polyomino piece with its display id.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    /// Single-character id, as emitted by the solution encoder.
    pub id: char,
    /// Canonical shape, normalized to the origin.
    pub cells: &'static [Coord],
}

/// Sums the areas of a piece catalog.
pub const fn total_area(pieces: &[Piece]) -> usize {
    let mut area = 0;
    let mut i = 0;
    while i < pieces.len() {
        assert!(pieces[i].cells.len() <= MAX_CELLS, "piece exceeds MAX_CELLS");
        area += pieces[i].cells.len();
        i += 1;
    }
    area
}

// Pentominoes shared by both catalogs.
const L5: &[Coord] = &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)];
const N5: &[Coord] = &[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)];
const P5: &[Coord] = &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];
const U5: &[Coord] = &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)];
const V5: &[Coord] = &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)];
const Y5: &[Coord] = &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)];
const Z5: &[Coord] = &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)];

// 2x3 rectangle, unique to the month/day catalog.
const O6: &[Coord] = &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];

// Tetrominoes, unique to the weekday catalog.
const O4: &[Coord] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const T4: &[Coord] = &[(0, 0), (0, 1), (0, 2), (1, 1)];
const S4: &[Coord] = &[(0, 1), (0, 2), (1, 0), (1, 1)];

/// The eight pieces of the classic month/day puzzle: one 2x3 rectangle and
/// seven pentominoes, 41 squares in total.
pub const MONTH_DAY_PIECES: &[Piece] = &[
    Piece { id: '0', cells: O6 },
    Piece { id: '1', cells: L5 },
    Piece { id: '2', cells: N5 },
    Piece { id: '3', cells: P5 },
    Piece { id: '4', cells: U5 },
    Piece { id: '5', cells: V5 },
    Piece { id: '6', cells: Y5 },
    Piece { id: '7', cells: Z5 },
];

/// The ten pieces of the weekday puzzle: three tetrominoes and seven
/// pentominoes, 47 squares in total.
pub const WEEKDAY_PIECES: &[Piece] = &[
    Piece { id: '0', cells: O4 },
    Piece { id: '1', cells: T4 },
    Piece { id: '2', cells: S4 },
    Piece { id: '3', cells: L5 },
    Piece { id: '4', cells: N5 },
    Piece { id: '5', cells: P5 },
    Piece { id: '6', cells: U5 },
    Piece { id: '7', cells: V5 },
    Piece { id: '8', cells: Y5 },
    Piece { id: '9', cells: Z5 },
];
