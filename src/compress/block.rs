//! Block packing
//!
//! A block is one flag byte followed by the payloads of up to eight tokens.
//! Flag bit `0x80 >> k` is set when slot `k` holds a literal.

use crate::common::{encode_reference, flag_bit, Token, BLOCK_TOKENS, MAX_BLOCK_PAYLOAD};

/// Block under construction
#[derive(Debug, Clone)]
pub struct Block {
    flags: u8,
    tokens: usize,
    payload: [u8; MAX_BLOCK_PAYLOAD],
    payload_len: usize,
}

impl Block {
    /// Create an empty block
    pub fn new() -> Self {
        Self {
            flags: 0,
            tokens: 0,
            payload: [0; MAX_BLOCK_PAYLOAD],
            payload_len: 0,
        }
    }

    /// Append a token to the next free slot
    ///
    /// The caller flushes before pushing into a full block.
    pub fn push(&mut self, token: Token) {
        debug_assert!(!self.is_full(), "push into a full block");

        match token {
            Token::Literal(byte) => {
                self.flags |= flag_bit(self.tokens);
                self.payload[self.payload_len] = byte;
                self.payload_len += 1;
            }
            Token::Reference { distance, length } => {
                let bytes = encode_reference(distance, length);
                self.payload[self.payload_len..self.payload_len + 2].copy_from_slice(&bytes);
                self.payload_len += 2;
            }
        }
        self.tokens += 1;
    }

    /// Flag byte for the tokens pushed so far
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Number of tokens in the block
    pub fn len(&self) -> usize {
        self.tokens
    }

    /// Whether no token has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.tokens == 0
    }

    /// Whether all eight slots are taken
    pub fn is_full(&self) -> bool {
        self.tokens == BLOCK_TOKENS
    }

    /// Encoded size of the block: flag byte plus payload
    pub fn encoded_len(&self) -> usize {
        1 + self.payload_len
    }

    /// Append the flag byte and payload to `out` and start a new block
    pub fn flush_into(&mut self, out: &mut Vec<u8>) {
        out.push(self.flags);
        out.extend_from_slice(&self.payload[..self.payload_len]);
        self.flags = 0;
        self.tokens = 0;
        self.payload_len = 0;
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}
