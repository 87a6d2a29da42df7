//! Error handling for LZSS operations
//!
//! Compression itself cannot fail; errors come from malformed compressed
//! streams and from the I/O adapters. The types live in `common` and are
//! re-exported here.

pub use crate::common::LzssError;
pub use crate::common::Result;
