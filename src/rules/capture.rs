//! Move application and jump captures
//!
//! A tiger that moves between the two ends of a jump path removes the goat
//! on the middle node. Application is a pure function: it returns a new
//! board and capture count and leaves the input untouched.

use crate::board::topology::jump_between;
use crate::board::{Board, Move, Node, Role};

/// Node whose goat would be taken if `side` moved `from` -> `to`.
///
/// Only tigers capture, and only along a jump path whose middle holds a
/// goat.
#[inline]
pub fn captured_by(board: &Board, from: Node, to: Node, side: Role) -> Option<Node> {
    if side != Role::Tiger {
        return None;
    }
    jump_between(from, to)
        .map(|path| path.middle)
        .filter(|&middle| board.get(middle) == Some(Role::Goat))
}

/// Apply `mv` for `side` and return the resulting board and capture count.
///
/// This function:
/// 1. Clears the source node (slides and jumps)
/// 2. Puts a `side` piece on the destination
/// 3. Removes the jumped goat and counts the capture
///
/// The placement counter is not touched; callers that track it advance it
/// themselves (see [`Position::after`](crate::board::Position::after)).
///
/// # Arguments
/// * `board` - Board before the move
/// * `mv` - Move to apply, assumed legal
/// * `side` - Side making the move
/// * `captured` - Goats captured before the move
///
/// # Returns
/// `(new_board, new_captured)`
#[must_use]
pub fn apply_move(board: &Board, mv: Move, side: Role, captured: u8) -> (Board, u8) {
    let mut next = *board;
    let mut captured = captured;
    let to = mv.destination();

    if let Some(from) = mv.source() {
        next.remove(from);
        if let Some(middle) = captured_by(board, from, to, side) {
            next.remove(middle);
            captured = captured.saturating_add(1);
        }
    }

    next.place(to, side);
    (next, captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u8) -> Node {
        Node::new(id)
    }

    #[test]
    fn test_apply_slide() {
        let board = Board::new();
        let (next, captured) = apply_move(&board, Move::between(n(0), n(1)), Role::Tiger, 0);

        assert!(next.is_empty(n(0)));
        assert_eq!(next.get(n(1)), Some(Role::Tiger));
        assert_eq!(captured, 0);
        assert_eq!(next.count(Role::Tiger), 4);
    }

    #[test]
    fn test_apply_jump_captures() {
        let board = Board::new().with(n(1), Role::Goat);
        let mv = Move::between(n(0), n(2));
        let (next, captured) = apply_move(&board, mv, Role::Tiger, 3);

        assert!(next.is_empty(n(0)));
        assert!(next.is_empty(n(1)), "jumped goat should be removed");
        assert_eq!(next.get(n(2)), Some(Role::Tiger));
        assert_eq!(captured, 4);
    }

    #[test]
    fn test_apply_jump_reverse_direction() {
        let board = Board::empty()
            .with(n(18), Role::Tiger)
            .with(n(13), Role::Goat);
        let (next, captured) = apply_move(&board, Move::between(n(18), n(8)), Role::Tiger, 0);

        assert!(next.is_empty(n(13)));
        assert_eq!(next.get(n(8)), Some(Role::Tiger));
        assert_eq!(captured, 1);
    }

    #[test]
    fn test_slide_constructed_on_jump_line_still_captures() {
        // The (from, to) pair decides the capture, not the variant
        let board = Board::new().with(n(1), Role::Goat);
        let mv = Move::Slide { from: n(0), to: n(2) };
        let (next, captured) = apply_move(&board, mv, Role::Tiger, 0);
        assert!(next.is_empty(n(1)));
        assert_eq!(captured, 1);
    }

    #[test]
    fn test_apply_placement() {
        let board = Board::new();
        let (next, captured) = apply_move(&board, Move::Place(n(11)), Role::Goat, 2);
        assert_eq!(next.get(n(11)), Some(Role::Goat));
        assert_eq!(captured, 2);
        assert_eq!(next.count(Role::Goat), 1);
    }

    #[test]
    fn test_goat_move_never_captures() {
        let board = Board::empty()
            .with(n(0), Role::Goat)
            .with(n(1), Role::Goat);
        assert_eq!(captured_by(&board, n(0), n(2), Role::Goat), None);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let board = Board::new().with(n(1), Role::Goat);
        let before = board;
        let _ = apply_move(&board, Move::between(n(0), n(2)), Role::Tiger, 0);
        assert_eq!(board, before);
    }
}
