//! Terminal front-end for the oxo engine
//!
//! A thin presentation layer: it validates nothing itself beyond parsing,
//! feeds moves into the session, and renders what the session reports back.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use oxo::{GameMode, MoveReport, Outcome, Player, SearchLevel, Session, SessionConfig, Status};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Play Tic-Tac-Toe against a random or minimax opponent")]
struct Cli {
    /// Search level for the automated opponent
    #[arg(long, value_enum, default_value_t = SearchLevel::Optimal)]
    level: SearchLevel,

    /// Play both seats manually instead of against the engine
    #[arg(long)]
    two_player: bool,

    /// Let the engine make the opening move
    #[arg(long)]
    engine_first: bool,

    /// Seed for the engine's random play
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON record of the finished game
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SessionConfig {
        mode: if cli.two_player {
            GameMode::TwoPlayer
        } else {
            GameMode::VsEngine
        },
        level: cli.level,
        first_player: if cli.engine_first {
            Player::O
        } else {
            Player::X
        },
        seed: cli.seed,
        ..SessionConfig::default()
    };
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut reports: Vec<MoveReport> = Vec::new();

    print_board(&session);

    while session.status() == Status::InProgress {
        let report = if session.engine_to_move() {
            let report = session.engine_turn()?;
            match report.score {
                Some(score) => println!(
                    "engine chose ({}, {}) with an eval of {score}",
                    report.cell.0, report.cell.1
                ),
                None => println!(
                    "engine chose ({}, {}) at random",
                    report.cell.0, report.cell.1
                ),
            }
            report
        } else {
            print!("player {}, enter row and col (0-2): ", session.to_move());
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line.context("failed to read move")?,
                None => break,
            };
            let Some((row, col)) = parse_move(&line) else {
                println!("expected two numbers between 0 and 2, e.g. '1 2'");
                continue;
            };
            match session.play(row, col) {
                Ok(report) => report,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        };

        reports.push(report);
        print_board(&session);
    }

    match session.status() {
        Status::Finished(Outcome::Win { player, .. }) => println!("player {player} won"),
        Status::Finished(Outcome::Draw) => println!("match drawn"),
        Status::InProgress => println!("match abandoned"),
    }

    if cli.json {
        let record = serde_json::json!({
            "moves": reports,
            "status": session.status(),
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn print_board(session: &Session) {
    println!("{}", session.board());
    println!();
}
