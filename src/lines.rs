//! Winning line table and line metadata
//!
//! The scan order of [`SCAN_ORDER`] is an observable contract: outcome
//! evaluation reports the first complete line found in this order, and the
//! presentation layer uses the reported [`Line`] to draw the strike-through.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Player};

/// The orientation of a winning line on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Column,
    Row,
    Diagonal,
}

/// A winning line, identified by orientation and index.
///
/// Columns and rows are indexed 0-2. Diagonal 0 is the descending diagonal
/// (top-left to bottom-right), diagonal 1 the ascending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub index: usize,
}

/// All 8 winning lines as cell-index triples, in evaluation priority order:
/// columns left to right, rows top to bottom, then the two diagonals.
pub const SCAN_ORDER: [(Line, [usize; 3]); 8] = [
    (
        Line {
            kind: LineKind::Column,
            index: 0,
        },
        [0, 3, 6],
    ),
    (
        Line {
            kind: LineKind::Column,
            index: 1,
        },
        [1, 4, 7],
    ),
    (
        Line {
            kind: LineKind::Column,
            index: 2,
        },
        [2, 5, 8],
    ),
    (
        Line {
            kind: LineKind::Row,
            index: 0,
        },
        [0, 1, 2],
    ),
    (
        Line {
            kind: LineKind::Row,
            index: 1,
        },
        [3, 4, 5],
    ),
    (
        Line {
            kind: LineKind::Row,
            index: 2,
        },
        [6, 7, 8],
    ),
    (
        Line {
            kind: LineKind::Diagonal,
            index: 0,
        },
        [0, 4, 8],
    ),
    (
        Line {
            kind: LineKind::Diagonal,
            index: 1,
        },
        [6, 4, 2],
    ),
];

/// Find the first complete line in scan order, together with its owner.
///
/// Returns `None` when no line is uniformly occupied by one player. Later
/// lines are not inspected once a winner is found, so on contrived boards
/// with several complete lines the reported line is deterministic.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Line, Player)> {
    for (line, positions) in SCAN_ORDER {
        let player = match cells[positions[0]] {
            Cell::X => Player::X,
            Cell::O => Player::O,
            Cell::Empty => continue,
        };
        let target = player.to_cell();
        if cells[positions[1]] == target && cells[positions[2]] == target {
            return Some((line, player));
        }
    }
    None
}

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    SCAN_ORDER
        .iter()
        .any(|(_, positions)| positions.iter().all(|&idx| cells[idx] == target))
}
