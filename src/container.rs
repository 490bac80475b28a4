//! The Grin container format.
//!
//! A `.grin` file is, MSB-first throughout:
//!
//! | Field        | Width         |
//! |--------------|---------------|
//! | Magic number | 32 bits       |
//! | Huffman tree | variable      |
//! | Payload      | variable      |
//! | Padding      | 0-7 zero bits |
//!
//! Encoding is two-pass by design: the whole input is buffered, scanned for
//! frequencies, and then re-walked for code emission. Simplicity is chosen
//! over single-pass streaming; inputs are bounded by available memory.

use std::fs;
use std::path::Path;

use log::debug;

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::huffman::{codec, stream, FrequencyTable, HuffmanTree};

/// Magic number identifying a Grin container.
pub const MAGIC: u32 = 0xFACE_B00C;

/// Compresses `data` into a Grin container.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let freqs = FrequencyTable::from_bytes(data);
    let tree = HuffmanTree::from_frequencies(&freqs);
    debug!(
        "compressing {} bytes over {} distinct symbols",
        data.len(),
        freqs.distinct()
    );

    let mut out = BitWriter::new(Vec::new());
    out.write_bits(MAGIC, 32)?;
    codec::serialize(tree.root(), &mut out)?;
    stream::encode(data, tree.codes(), &mut out)?;
    let packed = out.finish()?;
    debug!("container is {} bytes", packed.len());
    Ok(packed)
}

/// Decompresses a Grin container back into the original bytes.
///
/// Fails fast with [`Error::BadMagic`] if `data` does not start with
/// [`MAGIC`], and with [`Error::CorruptStream`] if the tree or payload is
/// truncated or malformed.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(data);
    let found = bits
        .read_bits(32)?
        .ok_or_else(|| Error::CorruptStream("container shorter than its header".to_string()))?;
    if found != MAGIC {
        return Err(Error::BadMagic { found });
    }

    let root = codec::deserialize(&mut bits)?;
    let tree = HuffmanTree::from_root(root);
    let mut out = Vec::new();
    stream::decode(tree.root(), &mut bits, &mut out)?;
    debug!("decompressed {} bytes from {} bytes", out.len(), data.len());
    Ok(out)
}

/// Encodes the file at `input` into a Grin container at `output`.
///
/// On error a partially written `output` may remain on disk; it is the
/// caller's responsibility to discard it.
pub fn encode<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = fs::read(input)?;
    let packed = compress(&data)?;
    fs::write(output, packed)?;
    Ok(())
}

/// Decodes the Grin container at `input` into the original file at `output`.
///
/// The container is fully validated and decoded before `output` is touched,
/// so a rejected or corrupt input writes no output bytes.
pub fn decode<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = fs::read(input)?;
    let restored = decompress(&data)?;
    fs::write(output, restored)?;
    Ok(())
}
