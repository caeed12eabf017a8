//! On-disk layout constants and small value types for the block file system.

/// Size of one index-table entry: a 24-bit length and a 24-bit starting block.
pub const INDEX_ENTRY_SIZE: usize = 6;

/// Size of one data block, header included.
pub const BLOCK_SIZE: usize = 520;

/// Size of a data block's header (file id, part number, next block, index id).
pub const BLOCK_HEADER_SIZE: usize = 8;

/// Maximum payload bytes carried by a single data block.
pub const BLOCK_PAYLOAD_SIZE: usize = BLOCK_SIZE - BLOCK_HEADER_SIZE;

/// A decoded index-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexEntry {
    /// Logical file length in bytes.
    pub length: u32,
    /// Starting block number; 0 means the file is empty.
    pub first_block: u32,
}

/// A file reconstructed from its block chain.
///
/// `valid` distinguishes "reconstructed successfully" (possibly zero-length)
/// from "the chain failed validation", which the public API surfaces as
/// `None` rather than handing back partial data.
#[derive(Debug, Clone, Default)]
pub struct ReconstructedFile {
    pub data: Vec<u8>,
    pub valid: bool,
}
