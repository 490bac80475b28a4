//! Huffman coding over the byte alphabet.
//!
//! This module family implements the codec engine:
//! - Frequency analysis over raw bytes ([`freq`])
//! - Deterministic Huffman tree construction and code derivation ([`tree`])
//! - Preorder tree (de)serialization ([`codec`])
//! - Bit-level stream encoding and decoding ([`stream`])
//!
//! Symbols are 9-bit values: `0..=255` are literal bytes and [`EOF`] is a
//! reserved end-of-file sentinel that terminates every coded stream. The
//! sentinel sits one past the byte range so it can never collide with real
//! data.

pub mod codec;
pub mod freq;
pub mod stream;
pub mod tree;

pub use freq::FrequencyTable;
pub use tree::{CodeTable, HuffmanTree, Node};

/// One element of the coded alphabet: a literal byte value or [`EOF`].
pub type Symbol = u16;

/// The end-of-file sentinel, fixed one past the largest byte value.
pub const EOF: Symbol = 256;

/// Number of distinct symbols (256 literal bytes plus the EOF sentinel).
pub const ALPHABET: usize = 257;
