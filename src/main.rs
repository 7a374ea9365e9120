//! Tiger hunt self-play
//!
//! Plays one engine-vs-engine game and prints the result.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tigerhunt::{AIEngine, ConfigError, Difficulty, EngineConfig, GameState, GameStatus, Role};

#[derive(Debug, Parser)]
#[command(name = "tigerhunt", about = "Play one engine-vs-engine tiger hunt game")]
struct Args {
    /// Tiger difficulty (easy, medium, hard)
    #[arg(long, default_value = "hard")]
    tiger: Difficulty,

    /// Goat difficulty (easy, medium, hard)
    #[arg(long, default_value = "hard")]
    goat: Difficulty,

    /// Seed for the random source (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file (Engine.toml in the working directory if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

fn main() -> Result<(), ConfigError> {
    // Default to 'info' unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::load_or_default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "tiger {} vs goat {}, seed {}, config {:?}",
        args.tiger, args.goat, seed, config
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = AIEngine::with_config(config);
    let mut game = GameState::new();

    let mut status = game.status();
    while !status.is_over() && game.history.len() < args.max_plies {
        let side = game.to_move;
        let difficulty = match side {
            Role::Tiger => args.tiger,
            Role::Goat => args.goat,
        };

        let result = engine.choose_move_with_stats(&game, difficulty, side, &mut rng);
        let Some(mv) = result.best_move else {
            warn!("{} cannot move on ply {}", side, game.history.len() + 1);
            break;
        };

        status = match game.play(mv) {
            Ok(status) => status,
            Err(e) => {
                warn!("engine move {} rejected: {}", mv, e);
                break;
            }
        };
        info!(
            "ply {}: {} {} (placed {}, captured {})",
            game.history.len(),
            side,
            mv,
            game.goats_placed,
            game.goats_captured
        );
    }

    match status {
        GameStatus::Won { winner, reason } => println!(
            "{} wins after {} plies: {} ({} goats captured)",
            winner,
            game.history.len(),
            reason,
            game.goats_captured
        ),
        GameStatus::Ongoing => println!(
            "no result after {} plies ({} goats captured)",
            game.history.len(),
            game.goats_captured
        ),
    }
    Ok(())
}
