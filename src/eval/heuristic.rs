//! Static evaluation of tiger hunt positions
//!
//! Used at search leaves and never recursive. The score is always from the
//! AI's assigned side, regardless of whose turn it is:
//! - Tigers value captures, open jumps, mobility and tigers standing together
//! - Goats value the reverse, plus connected walls and central junctions

use crate::board::topology::CENTRAL_NODES;
use crate::board::{Board, Node, Role};
use crate::rules::legal_moves;

use super::weights::{Weights, NEAR_WIN_CAPTURES};

/// Tiger-side quantities both evaluations read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TigerFeatures {
    /// Jump landings available, summed over all tigers
    pub capture_chances: i32,
    /// Tigers with no legal move
    pub trapped: i32,
    /// Legal tiger moves, summed over all tigers
    pub mobility: i32,
    /// Pairs of tigers on adjacent nodes
    pub coordination: i32,
}

/// Measure the tigers' situation on `board`.
#[must_use]
pub fn tiger_features(board: &Board, goats_placed: u8) -> TigerFeatures {
    let mut features = TigerFeatures::default();
    let tigers = board.pieces(Role::Tiger);

    for tiger in tigers {
        let dests = legal_moves(tiger, Role::Tiger, board, goats_placed);
        let moves = dests.len() as i32;

        features.mobility += moves;
        if moves == 0 {
            features.trapped += 1;
        }
        // Non-adjacent destinations are jump landings
        features.capture_chances += dests.iter().filter(|&d| !tiger.is_adjacent(d)).count() as i32;
        features.coordination += count_higher_neighbors(board, tiger, Role::Tiger);
    }

    features
}

/// Evaluate the position from the perspective of `ai_role`.
///
/// Returns a score where larger is better for `ai_role`.
///
/// # Arguments
/// * `board` - The current board state
/// * `ai_role` - The side the score is for
/// * `captured` - Goats captured so far
/// * `goats_placed` - Goats placed so far
#[must_use]
pub fn evaluate(board: &Board, ai_role: Role, captured: u8, goats_placed: u8) -> i32 {
    let tigers = tiger_features(board, goats_placed);
    let captured_i = i32::from(captured);

    match ai_role {
        Role::Tiger => {
            let mut score = captured_i * Weights::TIGER_CAPTURE;
            if captured >= NEAR_WIN_CAPTURES {
                score += Weights::TIGER_NEAR_WIN;
            }
            score + tigers.capture_chances * Weights::TIGER_CAPTURE_CHANCE
                - tigers.trapped * Weights::TIGER_TRAPPED
                + tigers.mobility * Weights::TIGER_MOBILITY
                + tigers.coordination * Weights::TIGER_COORDINATION
        }
        Role::Goat => {
            -captured_i * Weights::GOAT_LOSS
                + tigers.trapped * Weights::GOAT_TRAP
                - tigers.mobility * Weights::GOAT_TIGER_MOBILITY
                - tigers.capture_chances * Weights::GOAT_EXPOSED
                + goat_connections(board) * Weights::GOAT_CONNECTION
                + central_goats(board) * Weights::GOAT_CENTRAL
        }
    }
}

/// Adjacent goat pairs, each edge counted once
fn goat_connections(board: &Board) -> i32 {
    board
        .pieces(Role::Goat)
        .iter()
        .map(|goat| count_higher_neighbors(board, goat, Role::Goat))
        .sum()
}

/// Goats standing on the central junctions
fn central_goats(board: &Board) -> i32 {
    CENTRAL_NODES
        .iter()
        .filter(|&&node| board.get(node) == Some(Role::Goat))
        .count() as i32
}

/// Same-side neighbours with a larger id, so each pair is seen once
#[inline]
fn count_higher_neighbors(board: &Board, node: Node, role: Role) -> i32 {
    node.neighbors()
        .iter()
        .filter(|&&other| other > node && board.get(other) == Some(role))
        .count() as i32
}
