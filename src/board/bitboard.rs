//! Node set as a 24-bit mask

use super::{Node, NODE_COUNT};

const FULL_MASK: u32 = (1u32 << NODE_COUNT) - 1;

/// Set of board nodes, one bit per node id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeSet {
    bits: u32,
}

impl NodeSet {
    /// Create empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set containing every node
    pub const fn full() -> Self {
        Self { bits: FULL_MASK }
    }

    /// Add a node
    #[inline]
    pub fn insert(&mut self, node: Node) {
        self.bits |= 1u32 << node.index();
    }

    /// Remove a node
    #[inline]
    pub fn remove(&mut self, node: Node) {
        self.bits &= !(1u32 << node.index());
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        (self.bits >> node.index()) & 1 == 1
    }

    /// Number of nodes in the set
    #[inline]
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Nodes in `self` or `other`
    #[inline]
    pub fn union(self, other: NodeSet) -> NodeSet {
        NodeSet {
            bits: self.bits | other.bits,
        }
    }

    /// Nodes not in this set
    #[inline]
    pub fn complement(self) -> NodeSet {
        NodeSet {
            bits: !self.bits & FULL_MASK,
        }
    }

    /// Iterate over members in ascending id order
    pub fn iter(&self) -> NodeSetIter {
        NodeSetIter { bits: self.bits }
    }
}

impl FromIterator<Node> for NodeSet {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut set = NodeSet::new();
        for node in iter {
            set.insert(node);
        }
        set
    }
}

impl IntoIterator for NodeSet {
    type Item = Node;
    type IntoIter = NodeSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`NodeSet`]
pub struct NodeSetIter {
    bits: u32,
}

impl Iterator for NodeSetIter {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        // Lowest set bit, then clear it
        let idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Node::new(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}
