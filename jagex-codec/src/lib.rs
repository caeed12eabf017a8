//! Byte/bit buffer codec, name hash, and archive container codec for the
//! legacy Jagex client cache format.
//!
//! This crate has no knowledge of the on-disk block file system (see
//! `jagex-cache`); it only implements the wire-level primitives used to
//! build and parse archives once their raw bytes have been reconstructed.

pub mod archive;
pub mod buffer;
pub mod error;
pub mod hash;

pub use archive::{Archive, ArchiveFile, CompressionScheme};
pub use buffer::{ByteBuffer, Flags};
pub use error::{Error, Result};
pub use hash::hash_name;
