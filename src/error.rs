//! Error types for Grin compression and decompression.

use thiserror::Error;

/// Result type for Grin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding a Grin file.
///
/// No error is retried internally; every failure is surfaced to the caller.
/// A partially written output file left behind by a failed operation is not
/// cleaned up by this crate and must be treated as unusable.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not start with the Grin magic number.
    #[error("not a grin file: bad magic number {found:#010x}")]
    BadMagic {
        /// The 32-bit value actually read.
        found: u32,
    },

    /// The bit stream ended or was malformed before decoding completed.
    #[error("corrupt grin stream: {0}")]
    CorruptStream(String),

    /// An underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A byte to encode has no entry in the derived code table.
    ///
    /// This indicates a bug in tree or code-table construction and should
    /// never occur for a table derived from the same input.
    #[error("internal invariant violated: no code for symbol {0}")]
    MissingCode(u16),
}
