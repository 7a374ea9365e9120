//! Board representation for the tiger hunt
//!
//! The board is a fixed 24-node graph. Node ids are laid out row-major
//! over a 5x5 lattice whose cell at row 1, column 2 (the den) is missing:
//!
//! ```text
//!  0   1   2   3   4
//!  5   6   .   7   8
//!  9  10  11  12  13
//! 14  15  16  17  18
//! 19  20  21  22  23
//! ```

pub mod bitboard;
pub mod board;
pub mod moves;
pub mod position;
pub mod topology;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::NodeSet;
pub use board::Board;
pub use moves::Move;
pub use position::{Phase, Position};
pub use topology::{JumpPath, JUMP_PATHS, TIGER_START};

/// Number of nodes on the board
pub const NODE_COUNT: usize = 24;

/// Tigers on the board for the whole game
pub const TIGER_COUNT: u8 = 4;

/// Goats each game starts with in hand
pub const GOAT_COUNT: u8 = 18;

/// Captures that win the game for the tigers
pub const CAPTURES_TO_WIN: u8 = 8;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Capturing side: four pieces that slide and jump
    Tiger,
    /// Flock side: places eighteen pieces, then slides them
    Goat,
}

impl Role {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Role {
        match self {
            Role::Tiger => Role::Goat,
            Role::Goat => Role::Tiger,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Tiger => f.write_str("tiger"),
            Role::Goat => f.write_str("goat"),
        }
    }
}

/// A node on the board graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(u8);

impl Node {
    /// Unchecked constructor for ids known to be on the board.
    #[inline]
    pub(crate) const fn new(id: u8) -> Self {
        debug_assert!((id as usize) < NODE_COUNT);
        Self(id)
    }

    /// Checked constructor for ids coming from outside the crate.
    #[inline]
    pub fn try_new(id: u8) -> Option<Self> {
        ((id as usize) < NODE_COUNT).then_some(Self(id))
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All nodes in id order
    pub fn all() -> impl Iterator<Item = Node> {
        (0..NODE_COUNT as u8).map(Node)
    }

    /// Nodes connected to this one by an edge
    #[inline]
    pub fn neighbors(self) -> &'static [Node] {
        topology::ADJACENCY[self.index()]
    }

    /// Check whether `other` shares an edge with this node
    #[inline]
    pub fn is_adjacent(self, other: Node) -> bool {
        self.neighbors().contains(&other)
    }

    /// Weight used to order moves toward the middle of the board (0-4)
    #[inline]
    pub fn centrality(self) -> u8 {
        topology::CENTRALITY[self.index()]
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
