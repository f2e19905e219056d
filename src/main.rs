//! Kinarow: k-in-a-row against a minimax engine.
//!
//! ## Usage
//!
//! - `kinarow` - Play against the engine (you are X and move first)
//! - `kinarow demo --seed 7` - Watch the engine play itself
//! - `kinarow analyze "X.../.O../..../...."` - Best move for one position
//!
//! Set `RUST_LOG=kinarow=debug` to log every search.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kinarow::config::{Rules, SearchConfig};
use kinarow::constants::{DEFAULT_BOARD_SIZE, DEFAULT_DEPTH, DEFAULT_WIN_LENGTH};
use kinarow::game::{GameSession, analyze, self_play};
use kinarow::position::{Player, Position};

/// Kinarow: depth-limited minimax for k-in-a-row
#[derive(Parser)]
#[command(name = "kinarow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Markers in a row needed to win
    #[arg(long, global = true, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Search horizon in plies
    #[arg(long, short, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the terminal
    Play,
    /// Let the engine play both sides after a random opening
    Demo {
        /// Seed for the opening move (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the engine's choice for a position such as "X.../.O../..../...."
    Analyze {
        position: String,

        /// Side to move (inferred from marker counts if omitted)
        #[arg(long, value_enum)]
        to_move: Option<Side>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = Rules::new(cli.size, cli.win_length).context("invalid board settings")?;
    let config = SearchConfig::new(cli.depth).context("invalid search settings")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Play) | None => {
            let stdin = io::stdin();
            let mut session = GameSession::new(rules, config);
            session.play(&mut stdin.lock(), &mut out)?;
        }
        Some(Commands::Demo { seed }) => {
            let mut rng = match seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            self_play(&rules, &config, &mut rng, &mut out)?;
        }
        Some(Commands::Analyze { position, to_move }) => {
            let pos = Position::parse(&position, &rules)
                .with_context(|| format!("could not parse position {position:?}"))?;
            let side = to_move.map(Player::from).unwrap_or_else(|| pos.side_to_move());
            analyze(&pos, &rules, &config, side, &mut out)?;
        }
    }
    Ok(())
}
