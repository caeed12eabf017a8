//! Error types for the block-chained file system reader.

/// Errors produced while opening or reading a cache.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive codec error: {0}")]
    Codec(#[from] jagex_codec::Error),

    #[error("no data file found in directory: {0}")]
    NoDataFile(String),

    #[error("no index files found in directory: {0}")]
    NoIndexFiles(String),
}

/// Result alias used throughout `jagex-cache`.
pub type Result<T> = std::result::Result<T, Error>;
