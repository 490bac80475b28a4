//! Grin: a lossless Huffman-coding file compressor.
//!
//! The crate derives a prefix-free binary code for the byte alphabet of an
//! input, serializes the Huffman tree alongside the coded payload into a
//! self-describing container, and reverses the process to reconstruct the
//! original bytes exactly.
//!
//! # Examples
//!
//! ```rust
//! let data = b"huffman coding in rust";
//! let packed = grin::compress(data).unwrap();
//! let restored = grin::decompress(&packed).unwrap();
//! assert_eq!(restored, data);
//! ```

pub mod bitio;
pub mod container;
pub mod error;
pub mod huffman;

pub use container::{compress, decode, decompress, encode, MAGIC};
pub use error::{Error, Result};
