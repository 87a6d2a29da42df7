//! LZSS - Lempel-Ziv-Storer-Szymanski compression in pure Rust
//!
//! This crate compresses an in-memory byte buffer by replacing repeated
//! sequences with (distance, length) back-references into the previous 4096
//! bytes. Matches are found through a hash chain over 2-byte prefixes and
//! chosen greedily; tokens are packed eight to a block behind a flag byte.
//!
//! # Format
//!
//! - The stream is a plain concatenation of blocks: no header, no length, no
//!   end marker.
//! - A block is one flag byte and up to eight payloads. Flag bit `0x80 >> k`
//!   set means slot `k` is a literal (one raw byte); clear means a reference
//!   (two bytes).
//! - A reference stores `length - 3` in the high nibble of its first byte and
//!   `distance - 1` in the remaining twelve bits. Lengths run from 3 to 18,
//!   distances from 1 to 4096.
//!
//! # Example
//!
//! ```
//! use lzss::{compress, expand};
//!
//! let data = b"AAAAAAAAAA";
//! let compressed = compress(data);
//! assert_eq!(compressed, [0x80, b'A', 0x60, 0x00]);
//!
//! let expanded = expand(&compressed)?;
//! assert_eq!(expanded, data);
//! # Ok::<(), lzss::LzssError>(())
//! ```
//!
//! # Example - I/O adapters
//!
//! ```
//! use lzss::{ExpandReader, LzssWriter};
//! use std::io::{Read, Write};
//!
//! let mut writer = LzssWriter::new(Vec::new());
//! writer.write_all(b"to be or not to be")?;
//! let compressed = writer.finish()?;
//!
//! let mut reader = ExpandReader::new(compressed.as_slice());
//! let mut output = Vec::new();
//! reader.read_to_end(&mut output)?;
//! assert_eq!(output, b"to be or not to be");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod compress;
pub mod error;
pub mod expand;

// Async modules (only available with async feature)
#[cfg(feature = "async")]
pub mod async_batch;
#[cfg(feature = "async")]
pub mod async_convenience;

// Re-export commonly used types
pub use common::{
    CompressionStats, LzssError, Result, Token, BLOCK_TOKENS, MAX_DISTANCE, MAX_LENGTH,
    MIN_MATCH_LENGTH,
};
pub use compress::{compress_with_stats, tokenize, LzssWriter, MatchIndex, MatchResult};
pub use expand::{ExpandReader, TokenDecoder};

// Re-export async types when async feature is enabled
#[cfg(feature = "async")]
pub use async_batch::BatchCompressor;
#[cfg(feature = "async")]
pub use async_convenience::*;

// Convenience functions

/// Compress data with greedy LZSS
///
/// Deterministic and total: every input, including the empty one, has exactly
/// one compressed form.
///
/// # Arguments
/// * `data` - The data to compress
///
/// # Returns
/// A vector containing the compressed blocks
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress::compress_bytes(data)
}

/// Decompress an LZSS stream
///
/// # Arguments
/// * `data` - The compressed data
///
/// # Returns
/// A vector containing the decompressed data
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand::expand_bytes(data)
}
