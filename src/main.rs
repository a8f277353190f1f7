use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ludo_board::{
    GameConfig, GameSession,
    board::render_ascii,
    simulate::{play_game, simulate},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Race-around-the-board game, headless.
#[derive(Parser, Debug)]
#[command(name = "ludo-board", version)]
struct Cli {
    /// TOML file with [board] and [rules] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated board
    Board,

    /// Play one game, logging every turn event
    Play {
        #[arg(short, long, default_value = "2000")]
        ticks: u64,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play many games in parallel and print statistics
    Simulate {
        #[arg(short, long, default_value = "1000")]
        games: usize,

        #[arg(short, long, default_value = "20000")]
        ticks: u64,

        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command {
        Command::Board => {
            let session = GameSession::from_config(&config)?;
            println!("{}", render_ascii(&session));
            for player in session.players() {
                println!(
                    "{}: start {}, finish {}, home {:?}",
                    player.name(),
                    player.start_index(),
                    player.finish_index(),
                    player.home_cells()
                );
            }
        }
        Command::Play { ticks, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, ticks, "starting game");
            let mut board = String::new();
            let report = play_game(&config, seed, ticks, |session, event| {
                info!("{event}");
                board = render_ascii(session);
            })?;
            println!("{board}");
            println!("{report}");
        }
        Command::Simulate { games, ticks, seed } => {
            let start = std::time::Instant::now();
            let report = simulate(&config, games, ticks, seed)?;
            println!("{report}");
            info!("Simulation took: {:?}", start.elapsed());
        }
    }

    Ok(())
}
