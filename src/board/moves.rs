//! Move representation

use super::topology::jump_between;
use super::Node;

/// A single action by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Goat enters the board (placement phase only)
    Place(Node),
    /// Piece slides along an edge
    Slide { from: Node, to: Node },
    /// Tiger leaps along a jump path, capturing the goat on `over`
    Jump { from: Node, over: Node, to: Node },
}

impl Move {
    /// Build a board move from its two end nodes.
    ///
    /// A pair joined by a jump path becomes a [`Move::Jump`]; anything else
    /// is a [`Move::Slide`].
    #[must_use]
    pub fn between(from: Node, to: Node) -> Self {
        match jump_between(from, to) {
            Some(path) => Move::Jump {
                from,
                over: path.middle,
                to,
            },
            None => Move::Slide { from, to },
        }
    }

    /// Source node, `None` for placements
    #[inline]
    pub fn source(&self) -> Option<Node> {
        match *self {
            Move::Place(_) => None,
            Move::Slide { from, .. } | Move::Jump { from, .. } => Some(from),
        }
    }

    /// Destination node
    #[inline]
    pub fn destination(&self) -> Node {
        match *self {
            Move::Place(to) | Move::Slide { to, .. } | Move::Jump { to, .. } => to,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    #[inline]
    pub fn is_placement(&self) -> bool {
        matches!(self, Move::Place(_))
    }

    /// Check whether `self` undoes `other` (same two nodes, swapped).
    ///
    /// Placements never reverse anything.
    pub fn is_reverse_of(&self, other: &Move) -> bool {
        match (self.source(), other.source()) {
            (Some(from), Some(other_from)) => {
                from == other.destination() && self.destination() == other_from
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(to) => write!(f, "@{}", to),
            Move::Slide { from, to } => write!(f, "{}-{}", from, to),
            Move::Jump { from, over, to } => write!(f, "{}x{}-{}", from, over, to),
        }
    }
}
