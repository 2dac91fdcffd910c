//! Line-oriented shell around the library: reads commands from the standard
//! input, sets up positions, lists legal moves and counts perft nodes.
//!
//! Supported commands:
//!
//! - `position startpos [moves <move1> ... <move_i>]`
//! - `position [fen] <fenstring> [moves <move1> ... <move_i>]`
//! - `moves`: lists the legal moves, checks are marked with `+`
//! - `d`: prints the board
//! - `perft <depth>`: prints the node count under each legal move and the total
//! - `quit`
//!
//! Logging goes to the standard error and is configured through `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use itertools::Itertools;
use rookery::chess::board::Board;
use rookery::perft;
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    SetPosition {
        fen: Option<String>,
        moves: Vec<String>,
    },
    Moves,
    Display,
    Perft {
        depth: u8,
    },
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["position", arguments @ ..] => parse_position(arguments)
                .unwrap_or_else(|| Self::Unknown(input.trim().to_string())),
            ["moves"] => Self::Moves,
            ["d"] => Self::Display,
            ["perft", depth] => match depth.parse() {
                Ok(depth) => Self::Perft { depth },
                Err(_) => Self::Unknown(input.trim().to_string()),
            },
            ["quit"] => Self::Quit,
            _ => Self::Unknown(input.trim().to_string()),
        }
    }
}

fn parse_position(arguments: &[&str]) -> Option<Command> {
    let moves_index = arguments
        .iter()
        .position(|&token| token == "moves")
        .unwrap_or(arguments.len());
    let (setup, moves) = arguments.split_at(moves_index);
    let fen = match setup {
        [] => return None,
        ["startpos"] => None,
        ["fen", fen @ ..] => Some(fen.join(" ")),
        fen => Some(fen.join(" ")),
    };
    Some(Command::SetPosition {
        fen,
        moves: moves.iter().skip(1).map(ToString::to_string).collect(),
    })
}

fn set_position(fen: Option<&str>, moves: &[String]) -> anyhow::Result<Board> {
    let mut board = match fen {
        Some(fen) => Board::try_from(fen).with_context(|| format!("parsing position '{fen}'"))?,
        None => Board::starting(),
    };
    for uci in moves {
        let next_move = board
            .find_move(uci)
            .with_context(|| format!("{uci} is not a legal move in {board}"))?;
        board = board.make_move(next_move);
    }
    Ok(board)
}

fn run(input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
    let mut board = Board::starting();
    for line in input.lines() {
        let line = line.context("reading command")?;
        match Command::parse(&line) {
            Command::SetPosition { fen, moves } => match set_position(fen.as_deref(), &moves) {
                Ok(next) => board = next,
                Err(error) => {
                    tracing::warn!("{error:#}");
                    writeln!(output, "Error: {error:#}")?;
                },
            },
            Command::Moves => {
                writeln!(output, "{}", board.annotated_legal_moves().iter().join(" "))?;
            },
            Command::Display => writeln!(output, "{board:?}")?,
            Command::Perft { depth } => {
                let start = Instant::now();
                let split = perft::divide(&board, depth);
                for (root, nodes) in split.iter().sorted_by_key(|(root, _)| root.uci()) {
                    writeln!(output, "{}: {nodes}", root.uci())?;
                }
                let total: u64 = if depth == 0 {
                    perft::perft(&board, depth)
                } else {
                    split.iter().map(|(_, nodes)| nodes).sum()
                };
                writeln!(output)?;
                writeln!(output, "Nodes searched: {total}")?;
                tracing::info!(depth, nodes = total, elapsed = ?start.elapsed(), "perft finished");
            },
            Command::Quit => break,
            Command::Unknown(command) => {
                if !command.is_empty() {
                    tracing::warn!(%command, "unsupported command");
                    writeln!(output, "Unknown command: {command}")?;
                }
            },
        }
        output.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    rookery::print_engine_info();
    rookery::print_binary_info();
    run(io::stdin().lock(), &mut io::stdout().lock())
}
