//! Block-chained file system reader for the legacy Jagex client cache.
//!
//! Reconstructs arbitrary-length files from a data file of fixed 520-byte
//! blocks, indexed by per-index tables of 6-byte entries, with link-level
//! consistency checks. Also provides the per-index CRC digest and the file
//! I/O adapters the reader depends on.

pub mod block_fs;
pub mod cache;
pub mod crc;
pub mod error;
pub mod io;
pub mod types;

pub use cache::Cache;
pub use error::{Error, Result};
