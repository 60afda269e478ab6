//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::{Line, winning_line};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Outcome of a finished game: a win along a specific line, or a draw.
///
/// An in-progress game is represented as `None` at the call sites that
/// derive the outcome, see [`Board::outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win { player: Player, line: Line },
    Draw,
}

impl Outcome {
    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(player),
            Outcome::Draw => None,
        }
    }
}

/// The 3x3 board.
///
/// This type implements `Copy` so the search engine can explore candidate
/// moves on independent by-value snapshots without ever touching the live
/// board. The occupied-cell count is maintained incrementally on every mark
/// rather than recomputed by scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    marked: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            marked: 0,
        }
    }

    /// Create a board from a string of 9 cell characters in row-major order.
    ///
    /// Whitespace is filtered out, so multi-line layouts work. Piece counts
    /// are not validated: contrived positions are allowed for analysis and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly 9 cell
    /// characters or if any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::BadBoardLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or(crate::Error::BadCellCharacter {
                character: c,
                position: i,
            })?;
            board.cells[i] = cell;
            if cell != Cell::Empty {
                board.marked += 1;
            }
        }

        Ok(board)
    }

    fn index(row: usize, col: usize) -> usize {
        row * 3 + col
    }

    /// Get the cell at (row, col).
    ///
    /// Coordinates must be in `[0, 3)`; out-of-range coordinates panic.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// The raw cell grid in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if the cell at (row, col) is empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Empty
    }

    /// Mark the cell at (row, col) for a player.
    ///
    /// # Errors
    ///
    /// Fails fast without mutating the board when the coordinates are out of
    /// range or the cell is already occupied.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), crate::Error> {
        if row >= 3 || col >= 3 {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        if !self.is_empty(row, col) {
            return Err(crate::Error::CellOccupied { row, col });
        }

        self.place(row, col, player);
        Ok(())
    }

    /// Mark a cell known to be empty and in range.
    ///
    /// Used by the search engine on its own board snapshots, where every
    /// candidate comes straight out of `empty_cells`.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(self.is_empty(row, col));
        self.cells[Self::index(row, col)] = player.to_cell();
        self.marked += 1;
    }

    /// All empty cells as (row, col) pairs in row-major scan order.
    ///
    /// The ordering is load-bearing: minimax breaks ties by taking the first
    /// best-scoring candidate in this order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(9 - self.marked as usize);
        for row in 0..3 {
            for col in 0..3 {
                if self.is_empty(row, col) {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Count of occupied cells
    pub fn marked_count(&self) -> usize {
        self.marked as usize
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.marked == 9
    }

    /// Check if no cell is occupied
    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Derive the outcome from the current grid.
    ///
    /// Lines are checked in the priority order of
    /// [`SCAN_ORDER`](crate::lines::SCAN_ORDER): columns, rows, descending
    /// diagonal, ascending diagonal. The first complete line determines the
    /// winner and its reported [`Line`]. Returns `None` while the game is in
    /// progress, `Some(Outcome::Draw)` when the board is full with no winner.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some((line, player)) = winning_line(&self.cells) {
            return Some(Outcome::Win { player, line });
        }
        if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(Outcome::winner)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cell(row, col).to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineKind;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.is_empty_board());
        assert!(!board.is_full());
        assert_eq!(board.marked_count(), 0);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.cell(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_mark() {
        let mut board = Board::new();
        board.mark(1, 1, Player::X).unwrap();

        assert_eq!(board.cell(1, 1), Cell::X);
        assert_eq!(board.marked_count(), 1);
        assert!(!board.is_empty_board());
    }

    #[test]
    fn test_mark_occupied_cell_fails_without_mutation() {
        let mut board = Board::new();
        board.mark(0, 0, Player::X).unwrap();

        let before = board;
        let err = board.mark(0, 0, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::CellOccupied { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_mark_out_of_bounds() {
        let mut board = Board::new();
        let err = board.mark(3, 0, Player::X).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 3, col: 0 }));

        let err = board.mark(0, 7, Player::X).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 0, col: 7 }));
        assert!(board.is_empty_board());
    }

    #[test]
    fn test_marked_count_tracks_marks() {
        let mut board = Board::new();
        let moves = [(0, 0), (1, 1), (2, 2), (0, 2)];
        for (n, &(row, col)) in moves.iter().enumerate() {
            board.mark(row, col, Player::X).unwrap();
            assert_eq!(board.marked_count(), n + 1);
            assert_eq!(board.empty_cells().len(), 9 - (n + 1));
        }
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let mut board = Board::new();
        board.mark(0, 1, Player::X).unwrap();
        board.mark(1, 1, Player::O).unwrap();

        assert_eq!(
            board.empty_cells(),
            vec![(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_outcome_in_progress() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        assert_eq!(board.outcome(), None);
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_outcome_row_win() {
        let mut board = Board::from_string("XX. OO. ...").unwrap();
        board.mark(0, 2, Player::X).unwrap();

        let outcome = board.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::X,
                line: Line {
                    kind: LineKind::Row,
                    index: 0
                }
            }
        );
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_outcome_column_win() {
        let board = Board::from_string(".O. XOX .O.").unwrap();
        let outcome = board.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::O,
                line: Line {
                    kind: LineKind::Column,
                    index: 1
                }
            }
        );
    }

    #[test]
    fn test_outcome_diagonal_win() {
        let board = Board::from_string("X.. OX. O.X").unwrap();
        let outcome = board.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::X,
                line: Line {
                    kind: LineKind::Diagonal,
                    index: 0
                }
            }
        );
    }

    #[test]
    fn test_outcome_draw() {
        let board = Board::from_string("XOX XXO OXO").unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Some(Outcome::Draw));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_outcome_priority_on_contrived_board() {
        // Every line is complete; the column scan runs first.
        let board = Board::from_string("XXXXXXXXX").unwrap();
        let outcome = board.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::X,
                line: Line {
                    kind: LineKind::Column,
                    index: 0
                }
            }
        );
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let board = Board::from_string("XOX .X. O.O").unwrap();
        assert_eq!(board.outcome(), board.outcome());
        assert_eq!(board.empty_cells(), board.empty_cells());
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        let err = Board::from_string("XO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::BadBoardLength {
                expected: 9,
                got: 2
            }
        ));

        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::BadCellCharacter {
                character: 'Z',
                position: 2
            }
        ));
    }

    #[test]
    fn test_from_string_counts_marks() {
        let board = Board::from_string("XOX .O. ...").unwrap();
        assert_eq!(board.marked_count(), 4);
        assert_eq!(board.empty_cells().len(), 5);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
