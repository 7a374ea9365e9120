//! Position evaluation
//!
//! - [`heuristic`]: static leaf score used by the search
//! - [`placement`]: direct scoring of goat placements
//! - [`weights`]: scoring constants shared by both

pub mod heuristic;
pub mod placement;
pub mod weights;

pub use heuristic::{evaluate, tiger_features, TigerFeatures};
pub use placement::{choose_placement, exposes_goat, placement_score};
pub use weights::Weights;
