//! Tiger hunt rule engine and AI
//!
//! Four tigers hunt a flock of eighteen goats on a fixed 24-node board:
//! - Goats are placed one per turn, and only slide once all of them are in
//! - Tigers slide along edges or jump over a single goat to capture it
//! - Tigers win after 8 captures; goats win when no tiger can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards, fixed topology
//! - [`rules`]: Move generation, move application, win detection
//! - [`eval`]: Static evaluation and the goat placement heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Difficulty tiers integrating all components
//! - [`game`]: Caller-side game bookkeeping with undo
//! - [`config`]: `Engine.toml` loading
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tigerhunt::{choose_move, Difficulty, GameState, Role};
//!
//! let mut game = GameState::new();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! // Goats open the game
//! if let Some(mv) = choose_move(&game, Difficulty::Hard, Role::Goat, &mut rng) {
//!     let status = game.play(mv).expect("engine moves are legal");
//!     println!("goat plays {}, game over: {}", mv, status.is_over());
//! }
//! ```
//!
//! # Search
//!
//! The hard tier follows this order:
//! 1. Goat placement by direct scoring (no search)
//! 2. A capture that reaches the threshold is played at once
//! 3. Alpha-beta search, depth 4 while goats are placed and 6 afterwards

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Node, NodeSet, Phase, Position, Role};
pub use config::{ConfigError, EngineConfig};
pub use engine::{choose_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use game::{GameState, RuleError};
pub use rules::{apply_move, evaluate_win, legal_moves, GameStatus, WinReason};
