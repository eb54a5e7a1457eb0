//! Board layouts and cell classification for calendar puzzles.
//!
//! A board is a small rectangular grid (at most 64 cells, so occupancy fits
//! in a `u64` bitmask) where every position is classified exactly once as a
//! wall or a playable cell. Playable cells may carry calendar semantics: a
//! month, day-of-month, or weekday slot that can be left exposed as part of
//! the requested date.

/// Classification of one grid position.
///
/// Slot indices follow the request encoding: months are 1-12, days 1-31,
/// weekdays 0-6 with Sunday as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Not part of the playable area.
    Wall,
    /// Playable cell labeled with a month.
    Month(u8),
    /// Playable cell labeled with a day of month.
    Day(u8),
    /// Playable cell labeled with a weekday.
    Weekday(u8),
    /// Playable cell with no calendar label.
    Plain,
}

impl CellKind {
    /// Whether a piece may cover this cell at all.
    #[inline]
    pub fn is_playable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

/// An immutable, classified puzzle board.
///
/// Cells are stored in row-major order; all indices handed out by this type
/// use that enumeration, and the solution encoder mirrors it token for
/// token.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    wall_mask: u64,
}

/// Layout of the classic month/day puzzle: a 7x7 grid with six wall cells.
/// Months run Jan-Jun and Jul-Dec across the top two rows, days 1-31 fill
/// the rest in raster order.
const MONTH_DAY_LAYOUT: &[&str] = &[
    "MMMMMM#",
    "MMMMMM#",
    "DDDDDDD",
    "DDDDDDD",
    "DDDDDDD",
    "DDDDDDD",
    "DDD####",
];

/// Layout of the weekday puzzle: a 7x8 grid. Months on the top two rows as
/// in the classic board, days 1-31 below, weekdays Sun-Wed finishing row 6
/// and Thu-Sat ending the banner row. Cell positions match the flat indices
/// the original renderer computes (day `d` at 13 + d, Sunday at 45).
const WEEKDAY_LAYOUT: &[&str] = &[
    "MMMMMM#",
    "MMMMMM#",
    "DDDDDDD",
    "DDDDDDD",
    "DDDDDDD",
    "DDDDDDD",
    "DDDWWWW",
    "####WWW",
];

impl Board {
    /// The classic month/day board (43 playable cells).
    pub fn month_day() -> Self {
        Self::from_layout(MONTH_DAY_LAYOUT)
    }

    /// The month/day/weekday board (50 playable cells).
    pub fn weekday() -> Self {
        Self::from_layout(WEEKDAY_LAYOUT)
    }

    /// Builds a board from a layout description.
    ///
    /// Rows are strings of `#` (wall), `M`/`D`/`W` (slot cells), or `.`
    /// (plain). Slot indices are assigned in raster order: months 1-12,
    /// days 1-31, weekdays 0-6.
    ///
    /// # Panics
    ///
    /// Panics on an empty grid, ragged rows, unknown characters, or a grid
    /// larger than 64 cells. Layouts are compile-time constants, so a
    /// malformed one is a programming error, not a runtime condition.
    pub fn from_layout(layout: &[&str]) -> Self {
        let rows = layout.len();
        let cols = layout.first().map_or(0, |row| row.len());
        assert!(rows > 0 && cols > 0, "empty board layout");
        assert!(rows * cols <= 64, "board exceeds 64 cells");

        let mut cells = Vec::with_capacity(rows * cols);
        let mut wall_mask = 0u64;
        let (mut next_month, mut next_day, mut next_weekday) = (1u8, 1u8, 0u8);

        for row in layout {
            assert_eq!(row.len(), cols, "ragged board layout");
            for ch in row.chars() {
                let kind = match ch {
                    '#' => CellKind::Wall,
                    '.' => CellKind::Plain,
                    'M' => {
                        let kind = CellKind::Month(next_month);
                        next_month += 1;
                        kind
                    }
                    'D' => {
                        let kind = CellKind::Day(next_day);
                        next_day += 1;
                        kind
                    }
                    'W' => {
                        let kind = CellKind::Weekday(next_weekday);
                        next_weekday += 1;
                        kind
                    }
                    other => panic!("unknown layout character {other:?}"),
                };
                if kind == CellKind::Wall {
                    wall_mask |= 1 << cells.len();
                }
                cells.push(kind);
            }
        }

        Self {
            rows,
            cols,
            cells,
            wall_mask,
        }
    }

    /// Number of rows in the bounding grid.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the bounding grid.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count of the bounding grid, walls included.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Converts (row, col) to a flat row-major cell index.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Classification of the cell at a flat index.
    #[inline]
    pub fn kind(&self, idx: usize) -> CellKind {
        self.cells[idx]
    }

    /// Bitmask with every wall cell's bit set.
    #[inline]
    pub fn wall_mask(&self) -> u64 {
        self.wall_mask
    }

    /// Bitmask with every cell of the bounding grid set.
    #[inline]
    pub fn full_mask(&self) -> u64 {
        u64::MAX >> (64 - self.cells.len() as u32)
    }

    /// Number of non-wall cells.
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|kind| kind.is_playable()).count()
    }

    /// Finds the flat index of the cell with the given classification.
    ///
    /// Returns `None` when the board has no such slot, which the resolver
    /// reports as a configuration error.
    pub fn find_slot(&self, kind: CellKind) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_board_classification() {
        let board = Board::month_day();
        assert_eq!(board.rows(), 7);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.playable_count(), 43);

        let months = (1..=12).filter(|&m| board.find_slot(CellKind::Month(m)).is_some());
        assert_eq!(months.count(), 12);
        let days = (1..=31).filter(|&d| board.find_slot(CellKind::Day(d)).is_some());
        assert_eq!(days.count(), 31);
        assert_eq!(board.find_slot(CellKind::Weekday(0)), None);
    }

    #[test]
    fn weekday_board_classification() {
        let board = Board::weekday();
        assert_eq!(board.rows(), 8);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.playable_count(), 50);

        for m in 1..=12 {
            assert!(board.find_slot(CellKind::Month(m)).is_some(), "month {m}");
        }
        for d in 1..=31 {
            assert!(board.find_slot(CellKind::Day(d)).is_some(), "day {d}");
        }
        for w in 0..=6 {
            assert!(board.find_slot(CellKind::Weekday(w)).is_some(), "weekday {w}");
        }
    }

    /// Slot positions must match the flat indices the original renderer
    /// hard-codes: day d at 13 + d, Sun-Wed from 45, Thu-Sat from 53.
    #[test]
    fn weekday_board_matches_renderer_indices() {
        let board = Board::weekday();
        assert_eq!(board.find_slot(CellKind::Month(1)), Some(0));
        assert_eq!(board.find_slot(CellKind::Month(7)), Some(7));
        assert_eq!(board.find_slot(CellKind::Month(12)), Some(12));
        assert_eq!(board.find_slot(CellKind::Day(1)), Some(14));
        assert_eq!(board.find_slot(CellKind::Day(31)), Some(44));
        assert_eq!(board.find_slot(CellKind::Weekday(0)), Some(45));
        assert_eq!(board.find_slot(CellKind::Weekday(3)), Some(48));
        assert_eq!(board.find_slot(CellKind::Weekday(4)), Some(53));
        assert_eq!(board.find_slot(CellKind::Weekday(6)), Some(55));
    }

    #[test]
    #[should_panic(expected = "empty board layout")]
    fn rejects_empty_layout() {
        Board::from_layout(&[]);
    }

    #[test]
    #[should_panic(expected = "empty board layout")]
    fn rejects_zero_width_layout() {
        Board::from_layout(&["", ""]);
    }

    #[test]
    fn wall_mask_matches_classification() {
        for board in [Board::month_day(), Board::weekday()] {
            for idx in 0..board.cell_count() {
                let in_mask = board.wall_mask() & (1 << idx) != 0;
                assert_eq!(in_mask, board.kind(idx) == CellKind::Wall);
            }
            assert_eq!(
                board.full_mask().count_ones() as usize,
                board.cell_count()
            );
        }
    }
}
