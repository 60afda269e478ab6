//! Tic-Tac-Toe engine with an automated opponent
//!
//! This crate provides:
//! - A 3x3 board with incremental occupancy tracking and ordered, line-aware
//!   outcome detection
//! - An automated opponent playing either uniformly at random or optimally
//!   via exhaustive minimax
//! - A match orchestrator that front-ends drive through validated moves and
//!   explicit reports

pub mod board;
pub mod engine;
pub mod error;
pub mod lines;
pub mod session;

pub use board::{Board, Cell, Outcome, Player};
pub use engine::{Decision, Engine, SearchLevel};
pub use error::{Error, Result};
pub use lines::{Line, LineKind, SCAN_ORDER};
pub use session::{GameMode, MoveReport, Session, SessionConfig, Status};
