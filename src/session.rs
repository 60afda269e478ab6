//! Match orchestration: turn order, mode switching, and reset
//!
//! The session is the boundary the presentation layer talks to. Every state
//! change is reported back as an explicit [`MoveReport`] value instead of the
//! core mutating shared display state.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    engine::{Engine, SearchLevel},
    error::{Error, Result},
};

/// Whether the second seat is played by a human or the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    VsEngine,
}

impl GameMode {
    /// The other mode (manual/automated toggle)
    pub fn toggled(self) -> GameMode {
        match self {
            GameMode::TwoPlayer => GameMode::VsEngine,
            GameMode::VsEngine => GameMode::TwoPlayer,
        }
    }
}

/// Match status, derived from the board after every applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Finished(crate::board::Outcome),
}

/// Everything the presentation layer needs after a move: who moved where,
/// the resulting status (including the winning line on a win), and the
/// informational evaluation score for engine moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub cell: (usize, usize),
    pub player: Player,
    pub status: Status,
    pub score: Option<i32>,
}

/// Configuration for a match
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub level: SearchLevel,
    /// Which player the engine controls in [`GameMode::VsEngine`]
    pub engine_player: Player,
    /// Which player makes the opening move
    pub first_player: Player,
    /// Seed for the engine's rng; random when absent
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: GameMode::VsEngine,
            level: SearchLevel::Optimal,
            engine_player: Player::O,
            first_player: Player::X,
            seed: None,
        }
    }
}

/// A single match between two seats.
///
/// Owns the live board exclusively; the engine only ever reads it.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Player,
    first_player: Player,
    mode: GameMode,
    engine: Engine,
    status: Status,
}

impl Session {
    /// Start a match from a configuration
    pub fn new(config: SessionConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => Engine::with_seed(config.engine_player, config.level, seed),
            None => Engine::new(config.engine_player, config.level),
        };

        Session {
            board: Board::new(),
            to_move: config.first_player,
            first_player: config.first_player,
            mode: config.mode,
            engine,
            status: Status::InProgress,
        }
    }

    /// The live board, for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current match status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current game mode
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The engine's configured search level
    pub fn level(&self) -> SearchLevel {
        self.engine.level()
    }

    /// Change the engine's search level
    pub fn set_level(&mut self, level: SearchLevel) {
        self.engine.set_level(level);
    }

    /// Switch between manual and automated play
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Whether the next move belongs to the engine
    pub fn engine_to_move(&self) -> bool {
        self.mode == GameMode::VsEngine
            && self.status == Status::InProgress
            && self.to_move == self.engine.player()
    }

    /// Apply a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Rejects moves on a finished match with [`Error::GameOver`] and invalid
    /// cells with the board's validation errors. No state transition happens
    /// on rejection.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveReport> {
        if matches!(self.status, Status::Finished(_)) {
            return Err(Error::GameOver);
        }
        self.apply(row, col, None)
    }

    /// Ask the engine for its move and apply it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::GameOver`] on a finished match and
    /// [`Error::NotEngineTurn`] when it is not the engine's turn.
    pub fn engine_turn(&mut self) -> Result<MoveReport> {
        if matches!(self.status, Status::Finished(_)) {
            return Err(Error::GameOver);
        }
        if !self.engine_to_move() {
            return Err(Error::NotEngineTurn);
        }

        let decision = self.engine.choose(&self.board)?;
        let (row, col) = decision.cell;
        self.apply(row, col, decision.score)
    }

    fn apply(&mut self, row: usize, col: usize, score: Option<i32>) -> Result<MoveReport> {
        let mover = self.to_move;
        self.board.mark(row, col, mover)?;
        self.to_move = mover.opponent();
        self.status = match self.board.outcome() {
            Some(outcome) => Status::Finished(outcome),
            None => Status::InProgress,
        };

        Ok(MoveReport {
            cell: (row, col),
            player: mover,
            status: self.status,
            score,
        })
    }

    /// Start over with a fresh board.
    ///
    /// This is a full replace, not an undo: the board is re-created empty and
    /// the finished status cleared. Mode, search level, and the engine's rng
    /// state are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = self.first_player;
        self.status = Status::InProgress;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
