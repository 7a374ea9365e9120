//! Search module for the hard tier
//!
//! Contains:
//! - Minimax with alpha-beta pruning over [`Position`](crate::board::Position) values
//! - Move ordering and the winning-capture fast path

pub mod alphabeta;

pub use alphabeta::{order_moves, winning_captures, SearchResult, SearchStats, Searcher, WIN_SCORE};
