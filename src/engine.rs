//! Automated move selection: uniform random play and exhaustive minimax

use clap::ValueEnum;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Outcome, Player},
    error::{Error, Result},
};

/// Strength of the automated opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SearchLevel {
    /// Pick uniformly among the empty cells
    Random,
    /// Full-depth minimax over the remaining game tree
    Optimal,
}

/// A chosen move together with its informational evaluation.
///
/// The score is the minimax value of the position after the move (`None` for
/// random play). It is reported for logging and display only; callers consume
/// the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub cell: (usize, usize),
    pub score: Option<i32>,
}

/// The automated opponent.
///
/// Holds the identity of the player it controls, the configured search level,
/// and its own random number generator so that random play is reproducible
/// under a fixed seed.
#[derive(Debug, Clone)]
pub struct Engine {
    player: Player,
    level: SearchLevel,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with a randomly seeded rng
    pub fn new(player: Player, level: SearchLevel) -> Self {
        Self::with_seed(player, level, rand::random::<u64>())
    }

    /// Create an engine with a fixed rng seed (deterministic random play)
    pub fn with_seed(player: Player, level: SearchLevel, seed: u64) -> Self {
        Engine {
            player,
            level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The player this engine controls
    pub fn player(&self) -> Player {
        self.player
    }

    /// The configured search level
    pub fn level(&self) -> SearchLevel {
        self.level
    }

    /// Change the search level
    pub fn set_level(&mut self, level: SearchLevel) {
        self.level = level;
    }

    /// Choose a move on the given board.
    ///
    /// The board is only read; minimax explores candidate moves on by-value
    /// copies and never mutates the caller's board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesLeft`] when no empty cell remains. Callers are
    /// expected to check terminal status before asking for a move.
    pub fn choose(&mut self, board: &Board) -> Result<Decision> {
        match self.level {
            SearchLevel::Random => {
                let cell = *board
                    .empty_cells()
                    .choose(&mut self.rng)
                    .ok_or(Error::NoMovesLeft)?;
                Ok(Decision { cell, score: None })
            }
            SearchLevel::Optimal => {
                let (score, best) = self.minimax(*board, false);
                let cell = best.ok_or(Error::NoMovesLeft)?;
                Ok(Decision {
                    cell,
                    score: Some(score),
                })
            }
        }
    }

    /// Exhaustive minimax over the remaining game tree.
    ///
    /// The engine's own player is the minimizing side; its opponent maximizes.
    /// No pruning and no memoization: the full tree is enumerated, which is
    /// bounded on a 3x3 board and keeps the reference behavior intact.
    ///
    /// Candidates are tried in row-major order and the best move is updated on
    /// strict improvement only, so the first best-scoring cell in scan order
    /// wins ties. This tie-break is a deterministic contract relied on by
    /// reproducibility tests.
    fn minimax(&self, board: Board, maximizing: bool) -> (i32, Option<(usize, usize)>) {
        let maximizer = self.player.opponent();

        match board.outcome() {
            Some(Outcome::Win { player, .. }) if player == maximizer => return (1, None),
            Some(Outcome::Win { .. }) => return (-1, None),
            Some(Outcome::Draw) => return (0, None),
            None => {}
        }

        if maximizing {
            let mut best_score = i32::MIN;
            let mut best_move = None;

            for (row, col) in board.empty_cells() {
                let mut child = board;
                child.place(row, col, maximizer);
                let (score, _) = self.minimax(child, false);
                if score > best_score {
                    best_score = score;
                    best_move = Some((row, col));
                }
            }

            (best_score, best_move)
        } else {
            let mut best_score = i32::MAX;
            let mut best_move = None;

            for (row, col) in board.empty_cells() {
                let mut child = board;
                child.place(row, col, self.player);
                let (score, _) = self.minimax(child, true);
                if score < best_score {
                    best_score = score;
                    best_move = Some((row, col));
                }
            }

            (best_score, best_move)
        }
    }
}
