//! Greedy parser and block encoder
//!
//! The encoder scans the input once, taking the best match at each position
//! when it is at least `MIN_MATCH_LENGTH` long and a literal otherwise.
//! There is no lazy matching: the output is fixed by this rule.

use super::{block::Block, index::MatchIndex};
use crate::common::{CompressionStats, Token};

/// Compression state for a single in-memory buffer
#[derive(Debug)]
pub struct Encoder<'a> {
    data: &'a [u8],
    index: MatchIndex,
    pos: usize,
    block: Block,
    output: Vec<u8>,
    stats: CompressionStats,
}

impl<'a> Encoder<'a> {
    /// Index `data` and prepare to encode it
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: MatchIndex::build(data),
            pos: 0,
            block: Block::new(),
            output: Vec::with_capacity(data.len() + data.len().div_ceil(8)),
            stats: CompressionStats {
                input_bytes: data.len() as u64,
                ..CompressionStats::default()
            },
        }
    }

    /// Choose the token at the current position
    fn next_token(&self) -> Token {
        let found = self.index.best_match(self.data, self.pos);
        if found.is_match() {
            Token::Reference {
                distance: found.distance,
                length: found.length,
            }
        } else {
            Token::Literal(self.data[self.pos])
        }
    }

    /// Encode the whole buffer
    pub fn run(mut self) -> (Vec<u8>, CompressionStats) {
        while self.pos < self.data.len() {
            let token = self.next_token();
            self.pos += token.decoded_len();
            self.stats.record(&token);

            self.block.push(token);
            if self.block.is_full() {
                self.flush_block();
            }
        }

        if !self.block.is_empty() {
            self.flush_block();
        }

        self.stats.output_bytes = self.output.len() as u64;
        log::debug!(
            "compressed {} -> {} bytes ({} literals, {} references, {} blocks)",
            self.stats.input_bytes,
            self.stats.output_bytes,
            self.stats.literal_count,
            self.stats.reference_count,
            self.stats.block_count
        );

        (self.output, self.stats)
    }

    /// Parse the buffer into tokens without packing them
    pub fn tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while self.pos < self.data.len() {
            let token = self.next_token();
            self.pos += token.decoded_len();
            tokens.push(token);
        }
        tokens
    }

    fn flush_block(&mut self) {
        log::trace!(
            "flushing block {} (flags {:08b}, {} bytes)",
            self.stats.block_count,
            self.block.flags(),
            self.block.encoded_len()
        );
        self.block.flush_into(&mut self.output);
        self.stats.block_count += 1;
    }
}
