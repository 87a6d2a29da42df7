//! Decompression state management
//!
//! Holds the input buffer, the position inside the current block and the
//! history window that references copy from.

use super::{IN_BUFF_SIZE, WINDOW_SIZE};
use crate::common::{LzssError, Result, BLOCK_TOKENS};

/// Decompression state for the streaming reader
#[derive(Debug)]
pub struct ExpandState {
    /// Input buffer for reading compressed data
    pub in_buff: [u8; IN_BUFF_SIZE],
    /// Current position in input buffer
    pub in_pos: usize,
    /// Number of bytes available in input buffer
    pub in_bytes: usize,
    /// Compressed bytes consumed so far
    pub consumed: u64,

    /// Flag byte of the current block
    pub flags: u8,
    /// Next slot in the current block (BLOCK_TOKENS when a new flag byte is due)
    pub slot: usize,

    /// Circular history of the last WINDOW_SIZE output bytes
    pub window: [u8; WINDOW_SIZE],
    /// Next write position in the window
    pub window_pos: usize,
    /// Total bytes produced
    pub produced: u64,

    /// Distance of the reference being copied
    pub copy_distance: usize,
    /// Bytes of that reference still to copy
    pub copy_remaining: usize,
}

impl ExpandState {
    /// Create a new decompression state
    pub fn new() -> Self {
        Self {
            in_buff: [0; IN_BUFF_SIZE],
            in_pos: 0,
            in_bytes: 0,
            consumed: 0,
            flags: 0,
            slot: BLOCK_TOKENS,
            window: [0; WINDOW_SIZE],
            window_pos: 0,
            produced: 0,
            copy_distance: 0,
            copy_remaining: 0,
        }
    }

    /// Record an output byte in the history window
    pub fn push_byte(&mut self, byte: u8) {
        self.window[self.window_pos] = byte;
        self.window_pos = (self.window_pos + 1) % WINDOW_SIZE;
        self.produced += 1;
    }

    /// Start copying a reference, validating its distance
    pub fn begin_copy(&mut self, distance: usize, length: usize) -> Result<()> {
        if distance as u64 > self.produced {
            return Err(LzssError::InvalidDistance {
                distance,
                available: self.produced,
            });
        }
        self.copy_distance = distance;
        self.copy_remaining = length;
        Ok(())
    }

    /// Produce the next byte of the pending copy, if any
    ///
    /// Source and destination may overlap; each byte is read after the one
    /// before it has been written.
    pub fn copy_byte(&mut self) -> Option<u8> {
        if self.copy_remaining == 0 {
            return None;
        }
        let src = (self.window_pos + WINDOW_SIZE - self.copy_distance) % WINDOW_SIZE;
        let byte = self.window[src];
        self.push_byte(byte);
        self.copy_remaining -= 1;
        Some(byte)
    }
}

impl Default for ExpandState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_copy() -> Result<()> {
        let mut state = ExpandState::new();
        state.push_byte(b'a');
        state.push_byte(b'b');
        state.begin_copy(2, 5)?;

        let copied: Vec<u8> = std::iter::from_fn(|| state.copy_byte()).collect();
        assert_eq!(copied, b"ababa");
        assert_eq!(state.produced, 7);
        Ok(())
    }

    #[test]
    fn test_copy_across_window_wrap() -> Result<()> {
        let mut state = ExpandState::new();
        for i in 0..WINDOW_SIZE + 10 {
            state.push_byte((i % 256) as u8);
        }
        // oldest byte still in the window
        state.begin_copy(WINDOW_SIZE, 3)?;
        assert_eq!(state.copy_byte(), Some(10));
        assert_eq!(state.copy_byte(), Some(11));
        assert_eq!(state.copy_byte(), Some(12));
        assert_eq!(state.copy_byte(), None);
        Ok(())
    }

    #[test]
    fn test_distance_before_start() {
        let mut state = ExpandState::new();
        state.push_byte(b'x');
        let result = state.begin_copy(2, 3);
        assert!(matches!(
            result,
            Err(LzssError::InvalidDistance {
                distance: 2,
                available: 1
            })
        ));
    }
}
