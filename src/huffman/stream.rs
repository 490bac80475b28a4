//! Payload encoding and decoding over the code bitstream.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::huffman::tree::{CodeTable, Node};
use crate::huffman::{Symbol, EOF};

/// Emits the code for every byte of `input` in order, then the EOF code.
///
/// Does not flush or pad the sink; that is the caller's responsibility when
/// the whole container has been written. A byte without a table entry is an
/// internal invariant violation ([`Error::MissingCode`]): the table was
/// derived from the same input, so every byte must be covered.
pub fn encode<W: Write>(input: &[u8], codes: &CodeTable, out: &mut BitWriter<W>) -> Result<()> {
    for &byte in input {
        write_code(byte as Symbol, codes, out)?;
    }
    write_code(EOF, codes, out)
}

fn write_code<W: Write>(symbol: Symbol, codes: &CodeTable, out: &mut BitWriter<W>) -> Result<()> {
    let code = codes.get(&symbol).ok_or(Error::MissingCode(symbol))?;
    for bit in code.iter().by_vals() {
        out.write_bit(u8::from(bit))?;
    }
    Ok(())
}

/// Walks `root` per incoming bit (0 = left, 1 = right), emitting each
/// literal leaf's byte and resetting to the root, until the EOF leaf
/// terminates the stream.
///
/// Trailing pad bits after the EOF code are left unread. If the bit source
/// runs dry before an EOF leaf is reached, the stream is corrupt.
pub fn decode<R: Read, W: Write>(
    root: &Node,
    bits: &mut BitReader<R>,
    out: &mut W,
) -> Result<()> {
    // Lone-leaf tree (empty input, only the EOF sentinel): every bit maps
    // to the root's own symbol, costing one bit per emitted symbol.
    if let Node::Leaf { symbol, .. } = root {
        loop {
            next_bit(bits)?;
            if *symbol == EOF {
                return Ok(());
            }
            out.write_all(&[*symbol as u8])?;
        }
    }

    loop {
        let mut node = root;
        while let Node::Internal { left, right, .. } = node {
            node = if next_bit(bits)? == 0 { left } else { right };
        }
        if let Node::Leaf { symbol, .. } = node {
            if *symbol == EOF {
                return Ok(());
            }
            out.write_all(&[*symbol as u8])?;
        }
    }
}

fn next_bit<R: Read>(bits: &mut BitReader<R>) -> Result<u8> {
    bits.read_bit()?.ok_or_else(|| {
        Error::CorruptStream("bit stream ended before the EOF symbol".to_string())
    })
}
