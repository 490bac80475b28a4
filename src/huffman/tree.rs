//! Huffman tree construction and code-table derivation.
//!
//! Construction is the classic greedy merge: one leaf per symbol goes into a
//! min-priority queue ordered by weight, and the two lightest nodes are
//! repeatedly merged until a single root remains. Ties on weight are broken
//! by a creation sequence number assigned at queue insertion, so the same
//! input always yields the same tree shape and the same serialized output.
//! That determinism is a correctness requirement of the container format,
//! not an optimization.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use bitvec::prelude::*;

use crate::huffman::{FrequencyTable, Symbol};

/// A node of the Huffman tree.
///
/// The tree is full: every internal node has exactly two children, each
/// uniquely owned. Weights only matter during construction; they are not
/// preserved across serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf holds one symbol and its frequency.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: Symbol,
        /// Occurrence count of the symbol.
        weight: u64,
    },
    /// An internal node with two children and their combined weight.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached on bit 0.
        left: Box<Node>,
        /// Subtree reached on bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Returns the aggregate weight of the node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Returns true for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Mapping from symbol to its Huffman code, MSB-first.
pub type CodeTable = HashMap<Symbol, BitVec<u8, Msb0>>;

/// Min-queue entry: a node plus its creation sequence number.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed; on equal weight
/// the earlier-created node wins, which is what makes construction
/// deterministic across runs and platforms.
#[derive(Debug)]
struct QueueEntry {
    seq: u64,
    node: Box<Node>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node.weight() == other.node.weight() && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.node.weight(), other.seq).cmp(&(self.node.weight(), self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman tree together with its derived code table.
///
/// Constructed once per compression or decompression operation and never
/// mutated in place.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Box<Node>,
    codes: CodeTable,
}

impl HuffmanTree {
    /// Builds the optimal prefix tree for `freqs`.
    ///
    /// The result minimizes the weighted path length (sum of
    /// `frequency x depth` over leaves) among all binary prefix trees over
    /// the table's symbols. `freqs` is never empty because the EOF sentinel
    /// is always present.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let mut seq = 0u64;
        let mut heap = BinaryHeap::new();
        // Leaves are seeded in ascending symbol order, so sequence numbers
        // are themselves deterministic.
        for (symbol, weight) in freqs.symbols() {
            heap.push(QueueEntry {
                seq,
                node: Box::new(Node::Leaf { symbol, weight }),
            });
            seq += 1;
        }
        while heap.len() > 1 {
            let QueueEntry { node: left, .. } = heap.pop().expect("heap has two entries");
            let QueueEntry { node: right, .. } = heap.pop().expect("heap has two entries");
            heap.push(QueueEntry {
                seq,
                node: Box::new(Node::Internal {
                    weight: left.weight() + right.weight(),
                    left,
                    right,
                }),
            });
            seq += 1;
        }
        let QueueEntry { node: root, .. } =
            heap.pop().expect("frequency table always contains EOF");
        Self::from_root(root)
    }

    /// Wraps an already-built root (e.g. one deserialized from a container)
    /// and derives its code table.
    pub fn from_root(root: Box<Node>) -> Self {
        let mut codes = CodeTable::new();
        build_codes(&root, BitVec::new(), &mut codes);
        HuffmanTree { root, codes }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The derived code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// The code for one symbol, if it occurs in the tree.
    pub fn code(&self, symbol: Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }
}

/// One preorder walk accumulating the bit path; left edges append 0, right
/// edges append 1, and each leaf records the accumulated path as its code.
///
/// A lone-leaf root (empty input, only the EOF sentinel) gets the fixed
/// one-bit code `0`; every code is therefore non-empty.
fn build_codes(node: &Node, prefix: BitVec<u8, Msb0>, codes: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                bitvec![u8, Msb0; 0]
            } else {
                prefix
            };
            codes.insert(*symbol, code);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            build_codes(left, left_prefix, codes);
            let mut right_prefix = prefix;
            right_prefix.push(true);
            build_codes(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::EOF;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    #[test]
    fn test_every_symbol_gets_a_code() {
        let data = b"this is an example for huffman encoding";
        let tree = tree_for(data);
        for &byte in data.iter() {
            assert!(
                tree.code(byte as Symbol).is_some(),
                "missing code for {byte:#04x}"
            );
        }
        assert!(tree.code(EOF).is_some());
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let tree = tree_for(b"mississippi river runs deep");
        let codes: Vec<_> = tree.codes().values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_rarer_symbols_never_get_shorter_codes() {
        let data = b"aaaaaaaaaaaaaaaabbbbc";
        let tree = tree_for(data);
        let freqs = FrequencyTable::from_bytes(data);
        for (s1, w1) in freqs.symbols() {
            for (s2, w2) in freqs.symbols() {
                if w1 > w2 {
                    assert!(
                        tree.code(s1).map(|c| c.len()) <= tree.code(s2).map(|c| c.len()),
                        "symbol {s1} (weight {w1}) has a longer code than {s2} (weight {w2})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_least_frequent_pair_merges_first() {
        // [0x41, 0x41, 0x41, 0x42]: 0x42 and EOF both have weight 1 and
        // merge first, so 0x41 must end up with the strictly shortest code.
        let tree = tree_for(&[0x41, 0x41, 0x41, 0x42]);
        let a = tree.code(0x41).unwrap().len();
        let b = tree.code(0x42).unwrap().len();
        let eof = tree.code(EOF).unwrap().len();
        assert!(a < b);
        assert_eq!(b, eof);
    }

    #[test]
    fn test_single_symbol_gets_code_zero() {
        // Empty input: the table is {EOF: 1} and the lone leaf is the root.
        let tree = tree_for(b"");
        assert!(tree.root().is_leaf());
        assert_eq!(tree.codes().len(), 1);
        assert_eq!(tree.code(EOF).unwrap(), bits![u8, Msb0; 0]);
    }

    #[test]
    fn test_equal_weights_break_ties_deterministically() {
        // Every symbol occurs exactly once; shape is fully tie-driven.
        let data: Vec<u8> = (0u8..=255).collect();
        let first = tree_for(&data);
        let second = tree_for(&data);
        assert_eq!(first.root(), second.root());
        assert_eq!(first.codes(), second.codes());
    }

    #[test]
    fn test_internal_weights_are_sums_of_children() {
        fn check(node: &Node) {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        check(tree_for(b"weights flow upward").root());
    }
}
