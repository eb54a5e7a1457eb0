//! Backtracking exact-cover solver.
//!
//! Key optimizations:
//! - `u64` bitmask for occupied cells, seeded with walls and target cells
//! - Pre-computed placement table `[piece][cell]` for instant lookup of every
//!   placement covering a given cell
//! - Bitmask AND for collision detection, `trailing_ones` to pick the next
//!   cell to fill
//! - Dead-pocket pruning: a connected empty region smaller than the smallest
//!   unplaced piece can never be covered
//!
//! Cell selection is always the lowest-index empty cell in raster order and
//! pieces are tried in catalog order, so the first solution found is fully
//! determined by the inputs.

use thiserror::Error;

use crate::board::Board;
use crate::geometry::{orientations, Orientation};
use crate::pieces::{total_area, Piece, MAX_CELLS};

/// Structural input problems, distinct from the ordinary "no solution"
/// outcome. These indicate a bad request or catalog, never search failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("target cell {0} is outside the board")]
    TargetOutOfBounds(usize),
    #[error("target cell {0} is a wall")]
    TargetOnWall(usize),
    #[error("target cell {0} given more than once")]
    DuplicateTarget(usize),
    #[error("piece area {piece_area} does not match the {cells_to_cover} cells to cover")]
    AreaMismatch {
        piece_area: usize,
        cells_to_cover: usize,
    },
}

/// A piece placed on concrete board cells.
///
/// Fixed-size array to avoid heap allocation in the search hot loop.
#[derive(Clone, Copy, Debug)]
pub struct PlacedPiece {
    /// Index into the piece catalog passed to [`solve`].
    pub piece_index: usize,
    /// Flat cell indices occupied by the piece.
    positions: [u8; MAX_CELLS],
    /// Number of valid entries in `positions`.
    count: u8,
}

impl PlacedPiece {
    /// Builds a placement from explicit cell indices.
    ///
    /// # Panics
    ///
    /// Panics when more than [`MAX_CELLS`] cells are given.
    pub fn new(piece_index: usize, cells: &[u8]) -> Self {
        assert!(cells.len() <= MAX_CELLS, "piece exceeds MAX_CELLS");
        let mut positions = [0u8; MAX_CELLS];
        positions[..cells.len()].copy_from_slice(cells);
        Self {
            piece_index,
            positions,
            count: cells.len() as u8,
        }
    }

    /// The board cells this piece covers.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.positions[..self.count as usize]
    }
}

/// A complete assignment: one entry per placed piece, covering every
/// playable non-target cell exactly once.
pub type Solution = Vec<PlacedPiece>;

/// Pre-computed placement: an orientation anchored at a specific position.
#[derive(Clone, Copy)]
struct Placement {
    /// Bit `i` set iff cell `i` is occupied by this placement.
    mask: u64,
    positions: [u8; MAX_CELLS],
    count: u8,
}

/// All placements of one piece that cover one specific cell.
type CellPlacements = Vec<Placement>;

/// Lookup table indexed by `[piece_index][cell_index]`.
type PlacementTable = Vec<Vec<CellPlacements>>;

/// Finds a tiling of the board that covers every playable cell except the
/// targets, or proves none exists.
///
/// `Ok(None)` is the normal outcome for an infeasible date, not an error;
/// `Err` is reserved for structurally invalid inputs. The search is
/// deterministic: identical inputs produce the identical solution.
pub fn solve(
    board: &Board,
    targets: &[usize],
    pieces: &[Piece],
    allow_flip: bool,
) -> Result<Option<Solution>, SolveError> {
    assert!(pieces.len() <= 32, "piece catalog exceeds u32 bitmask");

    let mut blocked = board.wall_mask();
    for &target in targets {
        if target >= board.cell_count() {
            return Err(SolveError::TargetOutOfBounds(target));
        }
        let bit = 1u64 << target;
        if board.wall_mask() & bit != 0 {
            return Err(SolveError::TargetOnWall(target));
        }
        if blocked & bit != 0 {
            return Err(SolveError::DuplicateTarget(target));
        }
        blocked |= bit;
    }

    let cells_to_cover = board.playable_count() - targets.len();
    let piece_area = total_area(pieces);
    if piece_area != cells_to_cover {
        return Err(SolveError::AreaMismatch {
            piece_area,
            cells_to_cover,
        });
    }

    let ctx = SearchCtx::new(board, pieces, allow_flip, blocked);
    let mut placed = Vec::with_capacity(pieces.len());
    let all_pieces = ((1u64 << pieces.len()) - 1) as u32;

    if ctx.search(blocked, all_pieces, &mut placed) {
        Ok(Some(placed))
    } else {
        Ok(None)
    }
}

/// Immutable per-solve search context: placement table plus the board
/// geometry needed for pruning.
struct SearchCtx {
    table: PlacementTable,
    piece_sizes: Vec<u32>,
    full_mask: u64,
    cols: usize,
    /// Cells not in the leftmost column (safe to shift right by one).
    not_col_first: u64,
    /// Cells not in the rightmost column (safe to shift left by one).
    not_col_last: u64,
}

impl SearchCtx {
    fn new(board: &Board, pieces: &[Piece], allow_flip: bool, blocked: u64) -> Self {
        let cols = board.cols();
        let mut not_col_first = 0u64;
        let mut not_col_last = 0u64;
        for idx in 0..board.cell_count() {
            if idx % cols != 0 {
                not_col_first |= 1 << idx;
            }
            if idx % cols != cols - 1 {
                not_col_last |= 1 << idx;
            }
        }

        Self {
            table: build_placement_table(board, pieces, allow_flip, blocked),
            piece_sizes: pieces.iter().map(|p| p.cells.len() as u32).collect(),
            full_mask: board.full_mask(),
            cols,
            not_col_first,
            not_col_last,
        }
    }

    /// Recursive backtracking step. `occupied` includes walls and targets,
    /// so a full mask means every required cell is covered.
    fn search(&self, occupied: u64, remaining: u32, placed: &mut Vec<PlacedPiece>) -> bool {
        if occupied == self.full_mask {
            return true;
        }

        if self.has_dead_pocket(occupied, remaining) {
            return false;
        }

        // lowest-index empty cell; any tiling must cover it, so it is the
        // most constrained choice in raster order
        let target_cell = occupied.trailing_ones() as usize;

        for piece_index in 0..self.table.len() {
            if remaining & (1 << piece_index) == 0 {
                continue;
            }

            for placement in &self.table[piece_index][target_cell] {
                if occupied & placement.mask != 0 {
                    continue;
                }

                placed.push(PlacedPiece {
                    piece_index,
                    positions: placement.positions,
                    count: placement.count,
                });
                let next_remaining = remaining & !(1 << piece_index);

                if self.search(occupied | placement.mask, next_remaining, placed) {
                    return true;
                }

                // backtrack: undo the tentative placement
                placed.pop();
            }
        }

        false
    }

    /// Detects a connected region of empty cells too small for any unplaced
    /// piece. Pieces are connected, so such a region can never be covered.
    fn has_dead_pocket(&self, occupied: u64, remaining: u32) -> bool {
        let min_piece = self
            .piece_sizes
            .iter()
            .enumerate()
            .filter(|&(i, _)| remaining & (1 << i) != 0)
            .map(|(_, &size)| size)
            .min()
            .unwrap_or(0);

        let mut empty = self.full_mask & !occupied;
        while empty != 0 {
            let seed = 1u64 << empty.trailing_zeros();
            let mut region = seed;
            // bit-parallel flood fill within the empty mask
            loop {
                let grown = (region
                    | ((region & self.not_col_first) >> 1)
                    | ((region & self.not_col_last) << 1)
                    | (region >> self.cols)
                    | (region << self.cols))
                    & empty;
                if grown == region {
                    break;
                }
                region = grown;
            }
            if region.count_ones() < min_piece {
                return true;
            }
            empty &= !region;
        }
        false
    }
}

/// Builds the placement table: for each piece and each cell, every legal
/// anchoring of every orientation that covers that cell.
///
/// Placements touching a wall or target cell are rejected here once, so the
/// search loop only ever tests overlap against previously placed pieces.
fn build_placement_table(
    board: &Board,
    pieces: &[Piece],
    allow_flip: bool,
    blocked: u64,
) -> PlacementTable {
    pieces
        .iter()
        .map(|piece| {
            let piece_orientations = orientations(piece.cells, allow_flip);
            (0..board.cell_count())
                .map(|cell| {
                    let mut placements = Vec::new();
                    if blocked & (1 << cell) != 0 {
                        return placements;
                    }
                    for orientation in &piece_orientations {
                        for &anchor in &orientation.offsets {
                            if let Some(placement) =
                                try_place(board, blocked, orientation, cell, anchor)
                            {
                                placements.push(placement);
                            }
                        }
                    }
                    placements
                })
                .collect()
        })
        .collect()
}

/// Anchors an orientation so `anchor` lands on `cell`; returns `None` if any
/// covered position falls outside the board or on a blocked cell.
fn try_place(
    board: &Board,
    blocked: u64,
    orientation: &Orientation,
    cell: usize,
    anchor: (i32, i32),
) -> Option<Placement> {
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    let target = ((cell / board.cols()) as i32, (cell % board.cols()) as i32);
    let origin = (target.0 - anchor.0, target.1 - anchor.1);

    // bounding-box pre-check before touching individual cells
    if origin.0 < 0
        || origin.1 < 0
        || origin.0 + orientation.rows > rows
        || origin.1 + orientation.cols > cols
    {
        return None;
    }

    let mut mask = 0u64;
    let mut positions = [0u8; MAX_CELLS];
    for (i, &(dr, dc)) in orientation.offsets.iter().enumerate() {
        let idx = board.idx((origin.0 + dr) as usize, (origin.1 + dc) as usize);
        if blocked & (1 << idx) != 0 {
            return None;
        }
        mask |= 1 << idx;
        positions[i] = idx as u8;
    }

    Some(Placement {
        mask,
        positions,
        count: orientation.offsets.len() as u8,
    })
}
