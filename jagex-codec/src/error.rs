//! Error types for codec and archive operations.

/// Errors produced by the byte buffer codec and archive container parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cursor out of bounds: position {pos} exceeds buffer length {len}")]
    OutOfBounds { pos: usize, len: usize },

    #[error("string terminator not found within {len} bytes")]
    UnterminatedString { len: usize },

    #[error("duplicate archive file identifier: {0:#010x}")]
    DuplicateIdentifier(u32),

    #[error("archive file not found: {0:#010x}")]
    FileNotFound(u32),

    #[error("archive container truncated: expected at least {expected} bytes, got {actual}")]
    TruncatedContainer { expected: usize, actual: usize },

    #[error(
        "archive container length mismatch: decompressed {actual} bytes, header declared {expected}"
    )]
    LengthMismatch { expected: usize, actual: usize },

    #[error("bzip2 compression failed: {0}")]
    Bzip2(String),

    #[error("bzip2 stream missing expected magic header")]
    InvalidBzip2Stream,
}

/// Result alias used throughout `jagex-codec`.
pub type Result<T> = std::result::Result<T, Error>;
