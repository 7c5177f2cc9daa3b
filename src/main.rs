//! Gomoku-Minimax: five-in-a-row on the console.
//!
//! ## Usage
//!
//! - `gomoku-minimax` - Watch two engines play (same as `demo`)
//! - `gomoku-minimax demo` - 13x13, depth-4 `exp` black against depth-4 `fact` white
//! - `gomoku-minimax play --black human --white minimax` - Configure each side

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use gomoku_minimax::constants::{DEFAULT_DEPTH, DEFAULT_SIZE};
use gomoku_minimax::eval::Evaluator;
use gomoku_minimax::game::Game;
use gomoku_minimax::player::Player;
use gomoku_minimax::search::SearchEngine;

/// Gomoku-Minimax: five-in-a-row with alpha-beta search
#[derive(Parser)]
#[command(name = "gomoku-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print search statistics to stderr after every engine move
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Engine against engine with the classic settings
    Demo,
    /// Play a game with the given players
    Play(PlayArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Human,
    Naive,
    Minimax,
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    #[arg(long, value_enum, default_value_t = Kind::Human)]
    black: Kind,

    #[arg(long, value_enum, default_value_t = Kind::Minimax)]
    white: Kind,

    /// Search depth for a minimax black player
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    black_depth: u32,

    /// Search depth for a minimax white player
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    white_depth: u32,

    /// Evaluator for a minimax black player (exp or fact)
    #[arg(long, default_value_t = Evaluator::Exponential)]
    black_eval: Evaluator,

    /// Evaluator for a minimax white player (exp or fact)
    #[arg(long, default_value_t = Evaluator::Factorial)]
    white_eval: Evaluator,
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("invalid size: {s}"))?;
    if size == 0 {
        return Err("size must be at least 1".to_string());
    }
    Ok(size)
}

fn make_player(kind: Kind, depth: u32, evaluator: Evaluator) -> Player {
    match kind {
        Kind::Human => Player::console(),
        Kind::Naive => Player::naive(),
        Kind::Minimax => Player::search(SearchEngine::new(depth, evaluator)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (size, black, white) = match cli.command {
        Some(Commands::Play(args)) => (
            args.size,
            make_player(args.black, args.black_depth, args.black_eval),
            make_player(args.white, args.white_depth, args.white_eval),
        ),
        Some(Commands::Demo) | None => (
            13,
            make_player(Kind::Minimax, DEFAULT_DEPTH, Evaluator::Exponential),
            make_player(Kind::Minimax, DEFAULT_DEPTH, Evaluator::Factorial),
        ),
    };

    if cli.verbose {
        eprintln!("{size}x{size}: black {} vs white {}", black.name(), white.name());
    }

    let mut game = Game::new(size, black, white).verbose(cli.verbose);
    let stdout = io::stdout();
    game.run(&mut stdout.lock()).context("game aborted")?;
    Ok(())
}
