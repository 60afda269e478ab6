//! Board-level properties checked over the full reachable state space.

use std::collections::HashSet;

use oxo::{Board, Cell, Outcome, Player, lines};

/// Collect every board reachable through legal alternating play from the
/// standard X-first empty board. Play stops at terminal boards.
fn reachable_boards() -> HashSet<Board> {
    fn explore(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        if board.outcome().is_some() {
            return;
        }
        for (row, col) in board.empty_cells() {
            let mut child = board;
            child.mark(row, col, to_move).unwrap();
            explore(child, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    explore(Board::new(), Player::X, &mut seen);
    seen
}

#[test]
fn outcome_matches_brute_force_line_scan_on_all_reachable_boards() {
    let boards = reachable_boards();
    // The reachable state space of tic-tac-toe is a known quantity.
    assert_eq!(boards.len(), 5478);

    for board in boards {
        let x_won = lines::has_won(board.cells(), Player::X);
        let o_won = lines::has_won(board.cells(), Player::O);
        assert!(
            !(x_won && o_won),
            "reachable board with two winners: {board}"
        );

        match board.outcome() {
            Some(Outcome::Win { player, line }) => {
                assert_eq!(Some(player), board.winner());
                assert!(lines::has_won(board.cells(), player));
                // The reported line is actually complete and owned by the winner.
                let (_, positions) = lines::SCAN_ORDER
                    .iter()
                    .find(|(candidate, _)| *candidate == line)
                    .expect("reported line exists in the table");
                assert!(
                    positions
                        .iter()
                        .all(|&idx| board.cells()[idx] == player.to_cell())
                );
            }
            Some(Outcome::Draw) => {
                assert!(board.is_full());
                assert!(!x_won && !o_won);
            }
            None => {
                assert!(!x_won && !o_won);
                assert!(!board.is_full());
            }
        }
    }
}

#[test]
fn marked_count_matches_cell_scan_on_all_reachable_boards() {
    for board in reachable_boards() {
        let scanned = board
            .cells()
            .iter()
            .filter(|&&cell| cell != Cell::Empty)
            .count();
        assert_eq!(board.marked_count(), scanned);
        assert_eq!(board.empty_cells().len(), 9 - scanned);
    }
}

#[test]
fn empty_cells_is_always_row_major_sorted() {
    for board in reachable_boards() {
        let empty = board.empty_cells();
        let mut sorted = empty.clone();
        sorted.sort();
        assert_eq!(empty, sorted);
    }
}
