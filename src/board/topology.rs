//! Static board topology: adjacency, jump paths and node weights
//!
//! All tables are process-wide constants. Node ids follow the layout in
//! the [`board`](super) module docs.

use super::{Node, NODE_COUNT};

/// One way a tiger can leap: from `start` over `middle` onto `end`,
/// or the same line walked from `end` to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpPath {
    pub start: Node,
    pub middle: Node,
    pub end: Node,
}

impl JumpPath {
    const fn new(start: u8, middle: u8, end: u8) -> Self {
        Self {
            start: Node(start),
            middle: Node(middle),
            end: Node(end),
        }
    }

    /// If `node` is an end of this path, return the opposite end.
    #[inline]
    pub fn far_end(&self, node: Node) -> Option<Node> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Check whether this path connects `a` and `b` (in either direction)
    #[inline]
    pub fn joins(&self, a: Node, b: Node) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

/// Tiger start nodes: the four corners
pub const TIGER_START: [Node; 4] = [Node(0), Node(4), Node(19), Node(23)];

/// Neighbour lists, indexed by node id
pub static ADJACENCY: [&[Node]; NODE_COUNT] = [
    &[Node(1), Node(5)],                    // 0
    &[Node(0), Node(2), Node(6)],           // 1
    &[Node(1), Node(3)],                    // 2
    &[Node(2), Node(4), Node(7)],           // 3
    &[Node(3), Node(8)],                    // 4
    &[Node(0), Node(6), Node(9)],           // 5
    &[Node(1), Node(5), Node(10)],          // 6
    &[Node(3), Node(8), Node(12)],          // 7
    &[Node(4), Node(7), Node(13)],          // 8
    &[Node(5), Node(10), Node(14)],         // 9
    &[Node(6), Node(9), Node(11), Node(15)], // 10
    &[Node(10), Node(12), Node(16)],        // 11
    &[Node(7), Node(11), Node(13), Node(17)], // 12
    &[Node(8), Node(12), Node(18)],         // 13
    &[Node(9), Node(15), Node(19)],         // 14
    &[Node(10), Node(14), Node(16), Node(20)], // 15
    &[Node(11), Node(15), Node(17), Node(21)], // 16
    &[Node(12), Node(16), Node(18), Node(22)], // 17
    &[Node(13), Node(17), Node(23)],        // 18
    &[Node(14), Node(20)],                  // 19
    &[Node(15), Node(19), Node(21)],        // 20
    &[Node(16), Node(20), Node(22)],        // 21
    &[Node(17), Node(21), Node(23)],        // 22
    &[Node(18), Node(22)],                  // 23
];

/// Every capture line on the board (12 along rows, 13 along columns)
pub static JUMP_PATHS: [JumpPath; 25] = [
    // Rows
    JumpPath::new(0, 1, 2),
    JumpPath::new(1, 2, 3),
    JumpPath::new(2, 3, 4),
    JumpPath::new(9, 10, 11),
    JumpPath::new(10, 11, 12),
    JumpPath::new(11, 12, 13),
    JumpPath::new(14, 15, 16),
    JumpPath::new(15, 16, 17),
    JumpPath::new(16, 17, 18),
    JumpPath::new(19, 20, 21),
    JumpPath::new(20, 21, 22),
    JumpPath::new(21, 22, 23),
    // Columns
    JumpPath::new(0, 5, 9),
    JumpPath::new(5, 9, 14),
    JumpPath::new(9, 14, 19),
    JumpPath::new(1, 6, 10),
    JumpPath::new(6, 10, 15),
    JumpPath::new(10, 15, 20),
    JumpPath::new(11, 16, 21),
    JumpPath::new(3, 7, 12),
    JumpPath::new(7, 12, 17),
    JumpPath::new(12, 17, 22),
    JumpPath::new(4, 8, 13),
    JumpPath::new(8, 13, 18),
    JumpPath::new(13, 18, 23),
];

/// 4 minus the Manhattan distance to the centre cell, floored at 0
pub static CENTRALITY: [u8; NODE_COUNT] = [
    0, 1, 2, 1, 0, //
    1, 2, 2, 1, //
    2, 3, 4, 3, 2, //
    1, 2, 3, 2, 1, //
    0, 1, 2, 1, 0,
];

/// Junctions worth holding for the goats in the static evaluation
pub const CENTRAL_NODES: [Node; 5] = [Node(10), Node(12), Node(15), Node(16), Node(17)];

/// Most valuable placement targets: the centre and its orthogonal neighbours
pub const PLACEMENT_CORE: [Node; 4] = [Node(10), Node(11), Node(12), Node(16)];

/// Second-best placement targets: diagonal neighbours of the centre
pub const PLACEMENT_RING: [Node; 4] = [Node(6), Node(7), Node(15), Node(17)];

/// Find the jump path joining two end nodes, if any.
#[inline]
pub fn jump_between(from: Node, to: Node) -> Option<&'static JumpPath> {
    JUMP_PATHS.iter().find(|path| path.joins(from, to))
}

/// Jump paths that begin or end at `node`.
pub fn jumps_from(node: Node) -> impl Iterator<Item = &'static JumpPath> {
    JUMP_PATHS
        .iter()
        .filter(move |path| path.start == node || path.end == node)
}
