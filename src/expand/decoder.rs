//! Token decoding
//!
//! Reads the block structure of a compressed slice: a flag byte, then one
//! payload per flag bit until the slice runs out.

use crate::common::{decode_reference, flag_bit, LzssError, Result, Token, BLOCK_TOKENS};

/// Iterator over the tokens of a compressed stream
///
/// Yields at most one error, after which iteration ends.
#[derive(Debug, Clone)]
pub struct TokenDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    flags: u8,
    slot: usize,
    blocks: usize,
}

impl<'a> TokenDecoder<'a> {
    /// Start decoding at the first block of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            flags: 0,
            slot: BLOCK_TOKENS,
            blocks: 0,
        }
    }

    /// Number of flag bytes consumed so far
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.pos
    }

    fn fail(&mut self) -> LzssError {
        let offset = self.data.len() as u64;
        self.pos = self.data.len();
        LzssError::UnexpectedEof { offset }
    }

    fn decode_next(&mut self) -> Result<Token> {
        if self.slot == BLOCK_TOKENS {
            self.flags = self.data[self.pos];
            self.pos += 1;
            self.slot = 0;
            self.blocks += 1;
            if self.pos == self.data.len() {
                return Err(self.fail());
            }
        }

        let is_literal = self.flags & flag_bit(self.slot) != 0;
        self.slot += 1;

        if is_literal {
            let byte = self.data[self.pos];
            self.pos += 1;
            return Ok(Token::Literal(byte));
        }

        if self.pos + 1 >= self.data.len() {
            return Err(self.fail());
        }
        let (distance, length) = decode_reference([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(Token::Reference { distance, length })
    }
}

impl Iterator for TokenDecoder<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        Some(self.decode_next())
    }
}
