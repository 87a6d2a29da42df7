//! LZSS compression
//!
//! The compressor builds a [`MatchIndex`] over the whole input, then a greedy
//! [`Encoder`] walks it left to right and packs tokens eight to a block.

mod block;
mod encoder;
mod index;
mod pattern;
mod writer;

pub use block::Block;
pub use encoder::Encoder;
pub use index::{prefix_key, Chain, MatchIndex, PREFIX_TABLE_SIZE};
pub use pattern::{match_length, MatchResult};
pub use writer::LzssWriter;

use crate::common::{CompressionStats, Token};

/// Compress `data` into a stream of blocks
///
/// Empty input produces empty output.
pub fn compress_bytes(data: &[u8]) -> Vec<u8> {
    Encoder::new(data).run().0
}

/// Compress `data` and report what the encoder emitted
pub fn compress_with_stats(data: &[u8]) -> (Vec<u8>, CompressionStats) {
    Encoder::new(data).run()
}

/// Greedy token sequence for `data`, before block packing
pub fn tokenize(data: &[u8]) -> Vec<Token> {
    Encoder::new(data).tokens()
}
