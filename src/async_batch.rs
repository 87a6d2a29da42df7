//! Async batch processing module
//!
//! Compression of one buffer is a single CPU-bound pass, but separate buffers
//! share no state. This module runs many of them concurrently on tokio's
//! blocking pool.

#[cfg(feature = "async")]
/// Concurrent compression of independent buffers and files
pub mod processor {
    use crate::{compress_with_stats, CompressionStats, Result};
    use futures::stream::{self, StreamExt, TryStreamExt};
    use std::path::{Path, PathBuf};

    /// Run the compressor for one buffer on the blocking pool
    pub(crate) async fn compress_blocking(data: Vec<u8>) -> Result<(Vec<u8>, CompressionStats)> {
        let result = tokio::task::spawn_blocking(move || compress_with_stats(&data))
            .await
            .map_err(std::io::Error::from)?;
        Ok(result)
    }

    /// Concurrent compressor with a bounded number of jobs in flight
    #[derive(Debug, Clone)]
    pub struct BatchCompressor {
        concurrency_limit: usize,
    }

    impl BatchCompressor {
        /// Create a batch compressor running one job per CPU
        pub fn new() -> Self {
            Self {
                concurrency_limit: num_cpus::get(),
            }
        }

        /// Set the concurrency limit (at least 1)
        pub fn with_concurrency(mut self, limit: usize) -> Self {
            self.concurrency_limit = limit.max(1);
            self
        }

        /// Current concurrency limit
        pub fn concurrency(&self) -> usize {
            self.concurrency_limit
        }

        /// Compress several buffers, returning results in input order
        pub async fn compress_buffers(&self, buffers: Vec<Vec<u8>>) -> Result<Vec<Vec<u8>>> {
            stream::iter(buffers.into_iter().map(|data| async move {
                compress_blocking(data).await.map(|(compressed, _)| compressed)
            }))
            .buffered(self.concurrency_limit)
            .try_collect()
            .await
        }

        /// Read and compress multiple files concurrently
        pub async fn compress_files<P: AsRef<Path> + Send + Sync>(
            &self,
            files: Vec<P>,
        ) -> Result<Vec<(PathBuf, Vec<u8>)>> {
            let results = stream::iter(files.into_iter().map(|path| async move {
                let (path, compressed, _) = compress_single_file(path.as_ref()).await?;
                Ok::<_, crate::LzssError>((path, compressed))
            }))
            .buffer_unordered(self.concurrency_limit)
            .try_collect()
            .await?;

            Ok(results)
        }

        /// Stream per-file statistics as each file completes
        pub fn compress_files_streaming<P: AsRef<Path> + Send + Sync + 'static>(
            &self,
            files: Vec<P>,
        ) -> impl futures::Stream<Item = Result<(PathBuf, CompressionStats)>> + '_ {
            stream::iter(files.into_iter().map(|path| async move {
                let (path, _, stats) = compress_single_file(path.as_ref()).await?;
                Ok::<_, crate::LzssError>((path, stats))
            }))
            .buffer_unordered(self.concurrency_limit)
        }
    }

    impl Default for BatchCompressor {
        fn default() -> Self {
            Self::new()
        }
    }

    async fn compress_single_file(path: &Path) -> Result<(PathBuf, Vec<u8>, CompressionStats)> {
        let data = tokio::fs::read(path).await?;
        let (compressed, stats) = compress_blocking(data).await?;
        log::debug!(
            "{}: {} -> {} bytes",
            path.display(),
            stats.input_bytes,
            stats.output_bytes
        );
        Ok((path.to_path_buf(), compressed, stats))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::expand;

        #[tokio::test]
        async fn test_compress_buffers_keeps_order() -> Result<()> {
            let buffers: Vec<Vec<u8>> = (0..16u8)
                .map(|i| std::iter::repeat(i).take(10 + i as usize * 7).collect())
                .collect();

            let compressed = BatchCompressor::new()
                .with_concurrency(4)
                .compress_buffers(buffers.clone())
                .await?;

            assert_eq!(compressed.len(), buffers.len());
            for (original, packed) in buffers.iter().zip(&compressed) {
                assert_eq!(&expand(packed)?, original);
            }
            Ok(())
        }

        #[tokio::test]
        async fn test_compress_files() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let mut paths = Vec::new();
            for i in 0..5 {
                let path = dir.path().join(format!("input{i}.txt"));
                std::fs::write(&path, format!("file {i} file {i} file {i}"))?;
                paths.push(path);
            }

            let results = BatchCompressor::new().compress_files(paths).await?;
            assert_eq!(results.len(), 5);
            for (path, compressed) in results {
                assert_eq!(expand(&compressed)?, std::fs::read(&path)?);
            }
            Ok(())
        }

        #[tokio::test]
        async fn test_streaming_stats() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("run.bin");
            std::fs::write(&path, [b'A'; 10])?;

            let compressor = BatchCompressor::new();
            let stats: Vec<_> = compressor
                .compress_files_streaming(vec![path.clone()])
                .try_collect()
                .await?;
            assert_eq!(stats.len(), 1);
            assert_eq!(stats[0].0, path);
            assert_eq!(stats[0].1.input_bytes, 10);
            assert_eq!(stats[0].1.output_bytes, 4);
            Ok(())
        }

        #[test]
        fn test_concurrency_floor() {
            assert_eq!(BatchCompressor::new().with_concurrency(0).concurrency(), 1);
        }
    }
}

#[cfg(feature = "async")]
pub use processor::BatchCompressor;
