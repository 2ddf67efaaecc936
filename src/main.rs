//! Gomoku command line
//!
//! `selfplay` pits two engine configurations against each other;
//! `suggest` prints the engine's reply for a board read from a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::{
    run_selfplay, AIEngine, AgentConfig, Algorithm, Board, EngineConfig, GameStatus, Matchup,
    Stone, DEFAULT_DEPTH,
};

/// Gomoku engine driven from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play engine against engine
    Selfplay {
        /// Algorithm for Black (`minimax` or `alphabeta`)
        #[arg(long, default_value_t = Algorithm::Minimax)]
        black: Algorithm,

        /// Algorithm for White
        #[arg(long, default_value_t = Algorithm::AlphaBeta)]
        white: Algorithm,

        /// Search depth below the root move for both sides
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,

        /// Override the depth for Black
        #[arg(long)]
        black_depth: Option<u8>,

        /// Override the depth for White
        #[arg(long)]
        white_depth: Option<u8>,

        /// Seed for tie-breaking; games differ per index when given
        #[arg(long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Stop a game after this many moves
        #[arg(long)]
        max_moves: Option<usize>,

        /// Only print the summary, not the final boards
        #[arg(short, long)]
        quiet: bool,
    },

    /// Suggest a move for a position
    Suggest {
        /// Board file: 15 rows of `X`, `O` and `.`
        #[arg(short, long)]
        board: PathBuf,

        /// Side to move (`x` or `o`)
        #[arg(short, long, value_parser = parse_player)]
        player: Stone,

        #[arg(short, long, default_value_t = Algorithm::AlphaBeta)]
        algorithm: Algorithm,

        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_player(s: &str) -> Result<Stone, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Stone::from_symbol), chars.next()) {
        (Some(stone), None) if stone != Stone::Empty => Ok(stone),
        _ => Err(format!("expected `x` or `o`, got `{s}`")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Selfplay {
            black,
            white,
            depth,
            black_depth,
            white_depth,
            seed,
            games,
            max_moves,
            quiet,
        } => {
            let matchup = Matchup::new(
                AgentConfig::new(black, black_depth.unwrap_or(depth)),
                AgentConfig::new(white, white_depth.unwrap_or(depth)),
            );
            selfplay(&matchup, seed, games, max_moves, quiet)
        }
        Command::Suggest {
            board,
            player,
            algorithm,
            depth,
            seed,
        } => suggest(&board, player, algorithm, depth, seed),
    }
}

fn selfplay(
    matchup: &Matchup,
    seed: Option<u64>,
    games: u32,
    max_moves: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let (mut black_wins, mut white_wins, mut draws) = (0u32, 0u32, 0u32);

    for game in 0..games {
        let game_seed = seed.map(|s| s.wrapping_add(u64::from(game)));
        let record = run_selfplay(matchup, game_seed, max_moves)
            .with_context(|| format!("self-play game {} failed", game + 1))?;

        let outcome = match record.status {
            GameStatus::Won(Stone::Black) => {
                black_wins += 1;
                "Black wins"
            }
            GameStatus::Won(_) => {
                white_wins += 1;
                "White wins"
            }
            GameStatus::Draw => {
                draws += 1;
                "draw"
            }
            GameStatus::InProgress => "unfinished",
        };

        if !quiet {
            println!("{}", record.board);
        }
        println!(
            "game {}: {outcome} after {} moves (nodes: black {}, white {})",
            game + 1,
            record.moves.len(),
            record.nodes[0],
            record.nodes[1],
        );
    }

    info!(black = %matchup.black, white = %matchup.white, black_wins, white_wins, draws, "match finished");
    println!(
        "Black [{}] {black_wins} - {white_wins} White [{}], {draws} draws",
        matchup.black, matchup.white
    );
    Ok(())
}

fn suggest(
    path: &Path,
    player: Stone,
    algorithm: Algorithm,
    depth: u8,
    seed: Option<u64>,
) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let Some(mut board) = Board::from_rows(rows.as_slice()) else {
        bail!("{} is not a valid 15x15 board", path.display());
    };

    let mut engine = AIEngine::with_config(EngineConfig {
        depth,
        algorithm,
        seed,
    });
    let result = engine.get_move_with_stats(&mut board, player);

    match result.best_move {
        Some(pos) => println!(
            "{player} plays {pos} ({:?}, score {}, {} nodes, {}ms)",
            result.search_type, result.score, result.nodes, result.time_ms
        ),
        None => println!("no legal move: the board is full"),
    }
    Ok(())
}
