use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_core::config::GameConfig;
use connect_four_core::game::{Game, GameOutcome};
use connect_four_core::source::{MoveSource, RandomSource};

/// Play a random self-play game and print the result.
#[derive(Parser)]
#[command(name = "play", about = "Play a random drop-piece game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "game.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the run length required to win
    #[arg(long)]
    connect: Option<usize>,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Moves to generate per player
    #[arg(long, default_value_t = 64)]
    rounds: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(connect) = cli.connect {
        config.connect = connect;
    }

    let mut game = Game::new(&config).context("building game")?;

    let mut red_source = match cli.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::new(),
    };
    let mut black_source = match cli.seed {
        Some(seed) => RandomSource::seeded(seed.wrapping_add(1)),
        None => RandomSource::new(),
    };

    let red_moves: Vec<usize> = (0..cli.rounds)
        .map(|_| red_source.next_column(game.board()))
        .collect();
    let black_moves: Vec<usize> = (0..cli.rounds)
        .map(|_| black_source.next_column(game.board()))
        .collect();

    let (outcome, index) = game.play_move_sequence(&red_moves, &black_moves);

    println!("{}", game.board().render());
    match outcome {
        GameOutcome::Winner(color) => println!("{} wins on move {}", color.name(), index + 1),
        GameOutcome::Draw => println!("Draw on move {}", index + 1),
        GameOutcome::NotDone => println!("No result after {} move pairs", index),
    }
    Ok(())
}
