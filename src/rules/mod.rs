//! Game rules for the tiger hunt
//!
//! This module implements the rule set:
//! - Move generation (slides, jumps, placements)
//! - Move application with jump captures
//! - Win conditions (capture threshold, tigers blocked)

pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use capture::{apply_move, captured_by};
pub use movegen::{all_moves, capture_moves, is_blocked, legal_moves};
pub use win::{evaluate_win, GameStatus, WinReason};
