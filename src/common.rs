//! Common types and constants for the LZSS block format
//!
//! This module defines the format geometry, the token type shared by the
//! compressor and the decompressor, and the crate error type.

use thiserror::Error;

/// Largest back-reference distance (12 bits, stored as distance - 1)
pub const MAX_DISTANCE: usize = 4095 + 1;

/// Longest back-reference (4 bits, stored as length - 3)
pub const MAX_LENGTH: usize = 15 + 3;

/// Shortest match worth encoding as a reference
pub const MIN_MATCH_LENGTH: usize = 3;

/// Number of token slots covered by one flag byte
pub const BLOCK_TOKENS: usize = 8;

/// Largest payload of a single block (eight references)
pub const MAX_BLOCK_PAYLOAD: usize = BLOCK_TOKENS * 2;

/// Largest encoded block: flag byte plus payload
pub const MAX_BLOCK_SIZE: usize = 1 + MAX_BLOCK_PAYLOAD;

/// Flag bit for the token in `slot`, MSB first
pub const fn flag_bit(slot: usize) -> u8 {
    0x80 >> slot
}

/// Pack a reference into its two payload bytes
///
/// The high nibble of the first byte holds `length - 3`, the remaining twelve
/// bits hold `distance - 1`.
pub const fn encode_reference(distance: usize, length: usize) -> [u8; 2] {
    let d = distance - 1;
    [(((length - MIN_MATCH_LENGTH) << 4) | (d >> 8)) as u8, (d & 0xFF) as u8]
}

/// Unpack two payload bytes into `(distance, length)`
pub const fn decode_reference(bytes: [u8; 2]) -> (usize, usize) {
    let length = (bytes[0] >> 4) as usize + MIN_MATCH_LENGTH;
    let distance = (((bytes[0] & 0x0F) as usize) << 8 | bytes[1] as usize) + 1;
    (distance, length)
}

/// A single unit of the compressed stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One raw byte, copied as-is
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes before the output position
    Reference {
        /// Backward distance, 1..=MAX_DISTANCE
        distance: usize,
        /// Number of bytes to copy, MIN_MATCH_LENGTH..=MAX_LENGTH
        length: usize,
    },
}

impl Token {
    /// Whether this token sets its flag bit
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Number of payload bytes this token occupies in a block
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Reference { .. } => 2,
        }
    }

    /// Number of bytes this token expands to
    pub fn decoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Reference { length, .. } => *length,
        }
    }
}

/// Error type for LZSS operations
#[derive(Debug, Error)]
pub enum LzssError {
    /// Compressed stream ends in the middle of a token
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof {
        /// Offset into the compressed stream where more data was needed
        offset: u64,
    },

    /// Reference reaches before the start of the output
    #[error("Invalid distance {distance}: only {available} bytes decoded so far")]
    InvalidDistance {
        /// Distance carried by the reference
        distance: usize,
        /// Bytes available behind the output position
        available: u64,
    },

    /// Invalid data format or corruption
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for LZSS operations
pub type Result<T> = std::result::Result<T, LzssError>;

/// Statistics collected while compressing
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompressionStats {
    /// Number of literal tokens emitted
    pub literal_count: usize,
    /// Number of reference tokens emitted
    pub reference_count: usize,
    /// Longest reference emitted
    pub longest_match: usize,
    /// Number of blocks flushed (including a final partial block)
    pub block_count: usize,
    /// Uncompressed size
    pub input_bytes: u64,
    /// Compressed size
    pub output_bytes: u64,
}

impl CompressionStats {
    /// Compressed size over uncompressed size, 0.0 for empty input
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Total number of tokens emitted
    pub fn token_count(&self) -> usize {
        self.literal_count + self.reference_count
    }

    pub(crate) fn record(&mut self, token: &Token) {
        match token {
            Token::Literal(_) => self.literal_count += 1,
            Token::Reference { length, .. } => {
                self.reference_count += 1;
                self.longest_match = self.longest_match.max(*length);
            }
        }
    }
}
