//! Board value: which node holds which piece

use super::bitboard::NodeSet;
use super::topology::TIGER_START;
use super::{Node, Role};

/// Occupancy of the 24 nodes.
///
/// The two sets are kept disjoint by every mutator, so a node holds at
/// most one piece. `Board` is `Copy`: simulation works on values, never on
/// a shared board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    tigers: NodeSet,
    goats: NodeSet,
}

impl Board {
    /// Board with no pieces at all
    pub const fn empty() -> Self {
        Self {
            tigers: NodeSet::new(),
            goats: NodeSet::new(),
        }
    }

    /// Starting board: tigers on the four corners, no goats
    pub fn new() -> Self {
        let mut board = Self::empty();
        for node in TIGER_START {
            board.place(node, Role::Tiger);
        }
        board
    }

    /// Get the piece at a node
    #[inline]
    pub fn get(&self, node: Node) -> Option<Role> {
        if self.tigers.contains(node) {
            Some(Role::Tiger)
        } else if self.goats.contains(node) {
            Some(Role::Goat)
        } else {
            None
        }
    }

    /// Check if node is empty
    #[inline]
    pub fn is_empty(&self, node: Node) -> bool {
        !self.tigers.contains(node) && !self.goats.contains(node)
    }

    /// Put a piece on a node, replacing whatever was there
    #[inline]
    pub fn place(&mut self, node: Node, role: Role) {
        match role {
            Role::Tiger => {
                self.goats.remove(node);
                self.tigers.insert(node);
            }
            Role::Goat => {
                self.tigers.remove(node);
                self.goats.insert(node);
            }
        }
    }

    /// Clear a node
    #[inline]
    pub fn remove(&mut self, node: Node) {
        self.tigers.remove(node);
        self.goats.remove(node);
    }

    /// Builder-style [`place`](Self::place)
    #[must_use]
    pub fn with(mut self, node: Node, role: Role) -> Self {
        self.place(node, role);
        self
    }

    /// Nodes occupied by one side
    #[inline]
    pub fn pieces(&self, role: Role) -> NodeSet {
        match role {
            Role::Tiger => self.tigers,
            Role::Goat => self.goats,
        }
    }

    /// Nodes with no piece on them
    #[inline]
    pub fn empty_nodes(&self) -> NodeSet {
        self.tigers.union(self.goats).complement()
    }

    /// Number of pieces one side has on the board
    #[inline]
    pub fn count(&self, role: Role) -> u32 {
        self.pieces(role).len()
    }
}
