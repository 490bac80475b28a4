//! Preorder bit-packed tree serialization.
//!
//! Wire format, MSB-first:
//! - internal node: tag bit `0`, then the left subtree, then the right
//! - leaf node: tag bit `1`, then the symbol in a fixed 9-bit field
//!
//! Deserialization is the exact structural inverse; shape and leaf symbols
//! round-trip bit-for-bit. Weights are not written because code derivation
//! depends only on shape.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::huffman::tree::Node;
use crate::huffman::{Symbol, ALPHABET, EOF};

/// Writes `node` and its subtrees to `out` in preorder.
pub fn serialize<W: Write>(node: &Node, out: &mut BitWriter<W>) -> Result<()> {
    match node {
        Node::Leaf { symbol, .. } => {
            out.write_bit(1)?;
            out.write_bits(u32::from(*symbol), 9)?;
        }
        Node::Internal { left, right, .. } => {
            out.write_bit(0)?;
            serialize(left, out)?;
            serialize(right, out)?;
        }
    }
    Ok(())
}

/// Reads one serialized tree from `input`.
///
/// Fails with [`Error::CorruptStream`] if the bit source ends inside the
/// tree, a leaf carries an out-of-range symbol, or the tag sequence nests
/// deeper than any tree over the 257-symbol alphabet can.
pub fn deserialize<R: Read>(input: &mut BitReader<R>) -> Result<Box<Node>> {
    deserialize_node(input, 0)
}

fn deserialize_node<R: Read>(input: &mut BitReader<R>, depth: usize) -> Result<Box<Node>> {
    if depth > ALPHABET {
        return Err(Error::CorruptStream(
            "serialized tree nests deeper than the symbol alphabet allows".to_string(),
        ));
    }
    let tag = input.read_bit()?.ok_or_else(|| {
        Error::CorruptStream("bit stream ended inside the serialized tree".to_string())
    })?;
    if tag == 1 {
        let symbol = input.read_bits(9)?.ok_or_else(|| {
            Error::CorruptStream("bit stream ended inside a leaf symbol".to_string())
        })? as Symbol;
        if symbol > EOF {
            return Err(Error::CorruptStream(format!(
                "leaf symbol {symbol} is outside the alphabet"
            )));
        }
        Ok(Box::new(Node::Leaf { symbol, weight: 0 }))
    } else {
        let left = deserialize_node(input, depth + 1)?;
        let right = deserialize_node(input, depth + 1)?;
        Ok(Box::new(Node::Internal {
            weight: left.weight() + right.weight(),
            left,
            right,
        }))
    }
}
