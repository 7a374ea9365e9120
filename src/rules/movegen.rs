//! Legal move generation
//!
//! Every piece slides to an empty neighbour. Tigers may also leap along a
//! jump path over a goat onto the empty far end. Goats cannot move on the
//! board until all of them have been placed; until then their only moves
//! are placements on empty nodes.

use crate::board::topology::jumps_from;
use crate::board::{Board, Move, Node, NodeSet, Phase, Role};

/// Destinations reachable by the piece on `node`.
///
/// Returns an empty set when `node` does not hold a piece of `side`, and
/// for every goat while `goats_placed` is below the full flock.
///
/// # Arguments
/// * `node` - Node holding the piece to move
/// * `side` - Side the piece belongs to
/// * `board` - Current board state
/// * `goats_placed` - Goats placed so far (decides the goat phase)
#[must_use]
pub fn legal_moves(node: Node, side: Role, board: &Board, goats_placed: u8) -> NodeSet {
    let mut dests = NodeSet::new();

    if side == Role::Goat && Phase::of(goats_placed) == Phase::Placement {
        return dests;
    }
    if board.get(node) != Some(side) {
        return dests;
    }

    for &next in node.neighbors() {
        if board.is_empty(next) {
            dests.insert(next);
        }
    }

    if side == Role::Tiger {
        // Capture lines are walked in both directions
        for path in jumps_from(node) {
            let Some(landing) = path.far_end(node) else {
                continue;
            };
            if board.get(path.middle) == Some(Role::Goat) && board.is_empty(landing) {
                dests.insert(landing);
            }
        }
    }

    dests
}

/// Every legal move for `side`.
///
/// While goats are still being placed, a goat's moves are one placement
/// per empty node. Order is deterministic: ascending source, then
/// ascending destination.
#[must_use]
pub fn all_moves(board: &Board, side: Role, goats_placed: u8) -> Vec<Move> {
    if side == Role::Goat && Phase::of(goats_placed) == Phase::Placement {
        return board.empty_nodes().iter().map(Move::Place).collect();
    }

    let mut moves = Vec::with_capacity(16);
    for from in board.pieces(side) {
        for to in legal_moves(from, side, board, goats_placed) {
            moves.push(Move::between(from, to));
        }
    }
    moves
}

/// Jumps currently available to the tigers
#[must_use]
pub fn capture_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.pieces(Role::Tiger) {
        for path in jumps_from(from) {
            let Some(landing) = path.far_end(from) else {
                continue;
            };
            if board.get(path.middle) == Some(Role::Goat) && board.is_empty(landing) {
                moves.push(Move::Jump {
                    from,
                    over: path.middle,
                    to: landing,
                });
            }
        }
    }
    moves
}

/// Check if the piece on `node` has no legal move
#[inline]
pub fn is_blocked(node: Node, side: Role, board: &Board, goats_placed: u8) -> bool {
    legal_moves(node, side, board, goats_placed).is_empty()
}
