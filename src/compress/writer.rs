//! LzssWriter - buffered compression writer
//!
//! The compressor needs the whole input in memory, so the writer collects
//! everything written to it and encodes it in one pass when finished.

use super::encoder::Encoder;
use crate::common::{CompressionStats, Result};
use std::io::Write;

/// Compression writer implementing the Write trait
///
/// Nothing reaches the inner writer until [`LzssWriter::finish`] is called.
#[derive(Debug)]
pub struct LzssWriter<W: Write> {
    writer: W,
    input_buffer: Vec<u8>,
}

impl<W: Write> LzssWriter<W> {
    /// Create a new LzssWriter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            input_buffer: Vec::new(),
        }
    }

    /// Number of uncompressed bytes collected so far
    pub fn buffered_len(&self) -> usize {
        self.input_buffer.len()
    }

    /// Compress everything written, write it out and return the inner writer
    pub fn finish(self) -> Result<W> {
        self.finish_with_stats().map(|(writer, _)| writer)
    }

    /// Like [`LzssWriter::finish`], also returning compression statistics
    pub fn finish_with_stats(mut self) -> Result<(W, CompressionStats)> {
        let (compressed, stats) = Encoder::new(&self.input_buffer).run();
        self.writer.write_all(&compressed)?;
        self.writer.flush()?;
        Ok((self.writer, stats))
    }
}

impl<W: Write> Write for LzssWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.input_buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::compress_bytes;

    #[test]
    fn test_chunked_writes_match_one_shot() -> Result<()> {
        let data = b"It was the best of times, it was the worst of times, it was the age of wisdom";

        let mut writer = LzssWriter::new(Vec::new());
        for chunk in data.chunks(7) {
            writer.write_all(chunk)?;
        }
        assert_eq!(writer.buffered_len(), data.len());
        let output = writer.finish()?;

        assert_eq!(output, compress_bytes(data));
        Ok(())
    }

    #[test]
    fn test_flush_writes_nothing() -> Result<()> {
        let mut output = Vec::new();
        {
            let mut writer = LzssWriter::new(&mut output);
            writer.write_all(b"pending")?;
            writer.flush()?;
        }
        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn test_finish_with_stats() -> Result<()> {
        let mut writer = LzssWriter::new(Vec::new());
        writer.write_all(b"AAAAAAAAAA")?;
        let (output, stats) = writer.finish_with_stats()?;
        assert_eq!(output, [0x80, b'A', 0x60, 0x00]);
        assert_eq!(stats.input_bytes, 10);
        assert_eq!(stats.output_bytes, 4);
        Ok(())
    }
}
