//! LZSS decompression
//!
//! Reads blocks sequentially and replays their tokens. References copy byte
//! by byte, so a distance shorter than the length repeats the copied bytes.

mod decoder;
mod reader;
mod state;

pub use decoder::TokenDecoder;
pub use reader::ExpandReader;
pub use state::ExpandState;

use crate::common::{LzssError, Result, Token, MAX_DISTANCE};

/// Input buffer size for the streaming reader (2048 bytes)
pub const IN_BUFF_SIZE: usize = 0x800;

/// History kept by the streaming reader (4096 bytes)
pub const WINDOW_SIZE: usize = MAX_DISTANCE;

/// Decompress a complete stream held in memory
pub fn expand_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len() * 2);

    for token in TokenDecoder::new(data) {
        match token? {
            Token::Literal(byte) => output.push(byte),
            Token::Reference { distance, length } => {
                if distance > output.len() {
                    return Err(LzssError::InvalidDistance {
                        distance,
                        available: output.len() as u64,
                    });
                }
                let start = output.len() - distance;
                for i in start..start + length {
                    output.push(output[i]);
                }
            }
        }
    }

    log::debug!("expanded {} -> {} bytes", data.len(), output.len());
    Ok(output)
}
