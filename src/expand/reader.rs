//! ExpandReader - Streaming decompression reader
//!
//! Decodes tokens on demand from any `Read` source, keeping only the last
//! `WINDOW_SIZE` output bytes as history.

use super::state::ExpandState;
use crate::common::{decode_reference, flag_bit, LzssError, Result, BLOCK_TOKENS};
use std::io::Read;

/// Outcome of decoding one token
enum Step {
    Literal(u8),
    Copy,
    End,
}

/// Streaming decompression reader implementing Read trait
#[derive(Debug)]
pub struct ExpandReader<R: Read> {
    reader: R,
    state: ExpandState,
    finished: bool,
    failed: bool,
    pending_error: Option<LzssError>,
}

impl<R: Read> ExpandReader<R> {
    /// Create a new ExpandReader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: ExpandState::new(),
            finished: false,
            failed: false,
            pending_error: None,
        }
    }

    /// Total decompressed bytes produced so far
    pub fn total_out(&self) -> u64 {
        self.state.produced
    }

    /// Total compressed bytes consumed so far
    pub fn total_in(&self) -> u64 {
        self.state.consumed
    }

    /// Consume the reader, returning the underlying source
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Next compressed byte, refilling the input buffer when empty
    fn next_input_byte(&mut self) -> Result<Option<u8>> {
        if self.state.in_pos >= self.state.in_bytes {
            self.state.in_pos = 0;
            self.state.in_bytes = loop {
                match self.reader.read(&mut self.state.in_buff) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            };
            if self.state.in_bytes == 0 {
                return Ok(None);
            }
        }

        let byte = self.state.in_buff[self.state.in_pos];
        self.state.in_pos += 1;
        self.state.consumed += 1;
        Ok(Some(byte))
    }

    fn required_input_byte(&mut self) -> Result<u8> {
        self.next_input_byte()?.ok_or(LzssError::UnexpectedEof {
            offset: self.state.consumed,
        })
    }

    /// Decode the next token into the window
    ///
    /// References are left pending in the state for `copy_byte`.
    fn decode_token(&mut self) -> Result<Step> {
        let first = if self.state.slot == BLOCK_TOKENS {
            let Some(flags) = self.next_input_byte()? else {
                return Ok(Step::End);
            };
            self.state.flags = flags;
            self.state.slot = 0;
            self.required_input_byte()?
        } else {
            match self.next_input_byte()? {
                Some(byte) => byte,
                None => return Ok(Step::End),
            }
        };

        let is_literal = self.state.flags & flag_bit(self.state.slot) != 0;
        self.state.slot += 1;

        if is_literal {
            self.state.push_byte(first);
            return Ok(Step::Literal(first));
        }

        let second = self.required_input_byte()?;
        let (distance, length) = decode_reference([first, second]);
        self.state.begin_copy(distance, length)?;
        Ok(Step::Copy)
    }

    /// Fill `buf` with decompressed bytes
    ///
    /// A decode error after some bytes were written is held back until the
    /// next call. Once an error is reported every later call fails.
    fn expand_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        if self.failed {
            return Err(LzssError::InvalidData(
                "stream is corrupt past this point".to_string(),
            ));
        }

        let mut written = 0;

        while written < buf.len() {
            if let Some(byte) = self.state.copy_byte() {
                buf[written] = byte;
                written += 1;
                continue;
            }

            if self.finished {
                break;
            }

            let step = match self.decode_token() {
                Ok(step) => step,
                Err(err) => {
                    self.failed = true;
                    if written == 0 {
                        return Err(err);
                    }
                    self.pending_error = Some(err);
                    break;
                }
            };

            match step {
                Step::Literal(byte) => {
                    buf[written] = byte;
                    written += 1;
                }
                Step::Copy => {}
                Step::End => {
                    log::debug!(
                        "expanded {} -> {} bytes",
                        self.state.consumed,
                        self.state.produced
                    );
                    self.finished = true;
                }
            }
        }

        Ok(written)
    }
}

impl<R: Read> Read for ExpandReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.expand_into(buf).map_err(|e| match e {
            LzssError::Io(io) => io,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        })
    }
}
