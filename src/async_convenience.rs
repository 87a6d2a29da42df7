//! Async convenience functions
//!
//! This module provides easy-to-use async functions for common compression
//! and decompression operations. The codec runs on tokio's blocking pool; the
//! compressor still receives its whole input as one buffer.

#[cfg(feature = "async")]
/// Async wrappers around the one-shot codec
pub mod functions {
    use crate::async_batch::processor::compress_blocking;
    use crate::{expand, CompressionStats, Result};
    use std::path::Path;
    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

    /// Compress everything an async reader yields
    pub async fn compress_async<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        let (compressed, _) = compress_blocking(data).await?;
        Ok(compressed)
    }

    /// Decompress everything an async reader yields
    pub async fn expand_async<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        expand_blocking(data).await
    }

    /// Compress a buffer on the blocking pool
    pub async fn compress_bytes_async(data: &[u8]) -> Result<Vec<u8>> {
        let (compressed, _) = compress_blocking(data.to_vec()).await?;
        Ok(compressed)
    }

    /// Decompress a buffer on the blocking pool
    pub async fn expand_bytes_async(data: &[u8]) -> Result<Vec<u8>> {
        expand_blocking(data.to_vec()).await
    }

    /// Compress data from an async reader into an async writer
    pub async fn compress_to<R, W>(reader: R, mut writer: W) -> Result<u64>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let compressed = compress_async(reader).await?;
        writer.write_all(&compressed).await?;
        writer.flush().await?;
        Ok(compressed.len() as u64)
    }

    /// Compress a file asynchronously
    pub async fn compress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
    ) -> Result<CompressionStats> {
        let data = tokio::fs::read(input_path).await?;
        let (compressed, stats) = compress_blocking(data).await?;
        tokio::fs::write(output_path, &compressed).await?;
        Ok(stats)
    }

    /// Decompress a file asynchronously, returning the decompressed size
    pub async fn decompress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
    ) -> Result<u64> {
        let data = tokio::fs::read(input_path).await?;
        let expanded = expand_blocking(data).await?;
        tokio::fs::write(output_path, &expanded).await?;
        Ok(expanded.len() as u64)
    }

    /// Compress multiple files concurrently
    pub async fn compress_files<P: AsRef<Path> + Send + Sync>(
        files: Vec<P>,
        concurrency: Option<usize>,
    ) -> Result<Vec<(std::path::PathBuf, Vec<u8>)>> {
        use crate::async_batch::BatchCompressor;

        let mut processor = BatchCompressor::new();
        if let Some(limit) = concurrency {
            processor = processor.with_concurrency(limit);
        }

        processor.compress_files(files).await
    }

    async fn expand_blocking(data: Vec<u8>) -> Result<Vec<u8>> {
        tokio::task::spawn_blocking(move || expand(&data))
            .await
            .map_err(std::io::Error::from)?
    }

}

#[cfg(feature = "async")]
pub use functions::*;
