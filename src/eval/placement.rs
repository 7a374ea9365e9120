//! Non-searched goat placement
//!
//! The hard goat scores each empty node directly instead of searching.
//! Nodes a tiger could jump next turn are ruled out; the rest earn points
//! for crowding tigers, touching other goats and sitting near the middle.
//! A small random perturbation breaks ties.

use rand::Rng;

use crate::board::topology::{JUMP_PATHS, PLACEMENT_CORE, PLACEMENT_RING};
use crate::board::{Board, Node, Role};

use super::weights::Weights;

/// Check whether a goat on `node` could be jumped on the tigers' next move.
///
/// True when `node` is the middle of a jump path with a tiger on one end
/// and the other end empty.
#[must_use]
pub fn exposes_goat(board: &Board, node: Node) -> bool {
    JUMP_PATHS.iter().filter(|path| path.middle == node).any(|path| {
        let (a, b) = (board.get(path.start), board.get(path.end));
        (a == Some(Role::Tiger) && b.is_none()) || (b == Some(Role::Tiger) && a.is_none())
    })
}

/// Deterministic part of a placement candidate's score.
#[must_use]
pub fn placement_score(board: &Board, node: Node) -> i32 {
    if exposes_goat(board, node) {
        return Weights::PLACE_DANGER;
    }

    let mut score = 0;
    for &next in node.neighbors() {
        match board.get(next) {
            Some(Role::Tiger) => score += Weights::PLACE_CROWD_TIGER,
            Some(Role::Goat) => score += Weights::PLACE_WALL,
            None => {}
        }
    }

    if PLACEMENT_CORE.contains(&node) {
        score += Weights::PLACE_CORE;
    } else if PLACEMENT_RING.contains(&node) {
        score += Weights::PLACE_RING;
    }

    score
}

/// Pick the empty node with the best perturbed placement score.
///
/// # Arguments
/// * `board` - Current board state
/// * `jitter` - Exclusive upper bound of the random perturbation (0 disables it)
/// * `rng` - Random source for the perturbation
///
/// # Returns
/// The chosen node and its score, or `None` on a full board.
pub fn choose_placement<R: Rng>(board: &Board, jitter: i32, rng: &mut R) -> Option<(Node, i32)> {
    let mut best: Option<(Node, i32)> = None;

    for node in board.empty_nodes() {
        let noise = if jitter > 0 { rng.gen_range(0..jitter) } else { 0 };
        let score = placement_score(board, node) + noise;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((node, score));
        }
    }

    best
}
