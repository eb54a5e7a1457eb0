//! 2D rotation and reflection utilities.
//!
//! A flat polyomino has up to 8 distinct orientations: 4 rotations, and the
//! 4 rotations of its mirror image. One-sided pieces (flipping disallowed)
//! are limited to the first 4.

use rustc_hash::FxHashSet;

use crate::pieces::Coord;

/// The 4 rotation symmetries of the plane, in canonical order
/// (0, 90, 180, 270 degrees counterclockwise).
const ROTATIONS: [fn(Coord) -> Coord; 4] = [
    |(r, c)| (r, c),
    |(r, c)| (c, -r),
    |(r, c)| (-r, -c),
    |(r, c)| (-c, r),
];

/// All 8 symmetries: the rotations first, then the mirror image under each
/// rotation. Keeping the rotations as a prefix makes the rotation-only
/// orientation set a subset of the flip-enabled set by construction.
const SYMMETRIES: [fn(Coord) -> Coord; 8] = [
    ROTATIONS[0],
    ROTATIONS[1],
    ROTATIONS[2],
    ROTATIONS[3],
    |(r, c)| (r, -c),
    |(r, c)| (-c, -r),
    |(r, c)| (-r, c),
    |(r, c)| (c, r),
];

/// A piece shape after applying one symmetry and normalizing to the origin.
///
/// Offsets are sorted, so two orientations are equal exactly when their
/// offset sets are equal. The bounding box is kept for cheap fit pre-checks
/// before any per-cell legality test.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Normalized (row, col) offsets, sorted ascending.
    pub offsets: Vec<Coord>,
    /// Bounding box height in rows.
    pub rows: i32,
    /// Bounding box width in columns.
    pub cols: i32,
}

/// Generates the distinct orientations of a piece.
///
/// Applies the 4 rotations, then (when `allow_flip` is set) the 4 reflected
/// symmetries, in a fixed order; normalizes each result to the origin and
/// drops duplicates by exact offset-set equality, keeping the first
/// occurrence. Symmetric pieces therefore produce fewer than 8 orientations.
pub fn orientations(piece: &[Coord], allow_flip: bool) -> Vec<Orientation> {
    let symmetries = if allow_flip {
        &SYMMETRIES[..]
    } else {
        &SYMMETRIES[..ROTATIONS.len()]
    };

    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut result = Vec::new();

    for transform in symmetries {
        let transformed: Vec<Coord> = piece.iter().map(|&coord| transform(coord)).collect();
        let normalized = normalize_to_origin(transformed);
        if seen.insert(normalized.clone()) {
            let rows = normalized.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
            let cols = normalized.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
            result.push(Orientation {
                offsets: normalized,
                rows,
                cols,
            });
        }
    }

    result
}

/// Translates offsets so the minimum row and column are both zero, and sorts
/// them so that orientations differing only by translation or offset order
/// compare equal.
fn normalize_to_origin(mut offsets: Vec<Coord>) -> Vec<Coord> {
    let min_r = offsets.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_c = offsets.iter().map(|&(_, c)| c).min().unwrap_or(0);

    for (r, c) in &mut offsets {
        *r -= min_r;
        *c -= min_c;
    }

    offsets.sort_unstable();
    offsets
}
