//! Serialization of a solved board for the presentation layer.
//!
//! The format is positional and stable: one line per board row, one
//! space-separated token per column. Tokens are the covering piece's id,
//! `#` for walls, and `M`/`D`/`W` for the exposed month/day/weekday target
//! cells. External renderers pattern-match on exactly these tokens.

use crate::board::{Board, CellKind};
use crate::pieces::Piece;
use crate::solver::Solution;

/// Wall token.
const WALL: char = '#';
/// Tokens for the exposed target cells.
const MONTH: char = 'M';
const DAY: char = 'D';
const WEEKDAY: char = 'W';

/// Encodes a complete assignment as the board's textual form.
///
/// Every covered cell shows its piece id; the only playable cells left
/// showing a slot token are the targets, since the solver guarantees full
/// coverage of everything else.
pub fn encode(board: &Board, pieces: &[Piece], solution: &Solution) -> String {
    let mut tokens: Vec<char> = (0..board.cell_count())
        .map(|idx| match board.kind(idx) {
            CellKind::Wall => WALL,
            CellKind::Month(_) => MONTH,
            CellKind::Day(_) => DAY,
            CellKind::Weekday(_) => WEEKDAY,
            CellKind::Plain => '.',
        })
        .collect();

    for placed in solution {
        let id = pieces[placed.piece_index].id;
        for &cell in placed.cells() {
            tokens[cell as usize] = id;
        }
    }

    let mut output = String::with_capacity(board.cell_count() * 2);
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if col > 0 {
                output.push(' ');
            }
            output.push(tokens[board.idx(row, col)]);
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PlacedPiece;

    const LAYOUT: &[&str] = &["MD..", "...."];
    const CORNER: &[(i32, i32)] = &[(0, 0), (1, 0), (1, 1)];
    const LINE: &[(i32, i32)] = &[(0, 0), (0, 1), (0, 2)];
    const PIECES: &[Piece] = &[
        Piece { id: 'a', cells: CORNER },
        Piece { id: 'b', cells: LINE },
    ];

    /// Hand-built assignment on the 2x4 fixture: corner piece on cells
    /// 2, 3, 7 and line piece on cells 4, 5, 6, leaving the two slot cells
    /// exposed.
    fn fixture() -> (Board, Solution) {
        let board = Board::from_layout(LAYOUT);
        let solution = vec![
            PlacedPiece::new(0, &[2, 3, 7]),
            PlacedPiece::new(1, &[4, 5, 6]),
        ];
        (board, solution)
    }

    #[test]
    fn encodes_positionally() {
        let (board, solution) = fixture();
        insta::assert_snapshot!(encode(&board, PIECES, &solution).trim_end(), @r"
        M D a a
        b b b a
        ");
    }

    /// Decodes the stable text format back into per-cell tokens.
    fn decode(text: &str) -> Vec<Vec<char>> {
        text.lines()
            .map(|line| {
                line.split(' ')
                    .map(|token| {
                        assert_eq!(token.chars().count(), 1, "token {token:?}");
                        token.chars().next().unwrap()
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn round_trip_recovers_targets_and_piece_ids() {
        let (board, solution) = fixture();
        let grid = decode(&encode(&board, PIECES, &solution));

        assert_eq!(grid.len(), board.rows());
        for row in &grid {
            assert_eq!(row.len(), board.cols());
        }

        // targets come back as their slot tokens at the exact positions
        assert_eq!(grid[0][0], 'M');
        assert_eq!(grid[0][1], 'D');

        // every covered cell comes back as its piece id
        for placed in &solution {
            let id = PIECES[placed.piece_index].id;
            for &cell in placed.cells() {
                let (row, col) = (cell as usize / board.cols(), cell as usize % board.cols());
                assert_eq!(grid[row][col], id);
            }
        }
    }

    #[test]
    fn wall_token_is_distinct() {
        let board = Board::from_layout(&["M#", "D."]);
        let solution = vec![PlacedPiece::new(1, &[3])];
        let text = encode(&board, &[PIECES[0], Piece { id: 'c', cells: &[(0, 0)] }], &solution);
        assert_eq!(text, "M #\nD c\n");
    }
}
