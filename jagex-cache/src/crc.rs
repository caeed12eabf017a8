//! Per-index CRC summary, mirroring the legacy client's cache verification
//! file: one CRC-32 per reconstructed file plus a running checksum-of-checksums.

use crate::types::ReconstructedFile;
use jagex_codec::buffer::ByteBuffer;

const ACCUMULATOR_SEED: u32 = 1234;

/// Build the `(num_files + 1)` big-endian u32-word digest for `files`.
///
/// The final word is a running accumulator seeded at 1234, updated per file
/// as `acc = (acc << 1) + crc` using each file's CRC-32 before big-endian
/// serialization.
#[must_use]
pub fn build_digest(files: &[ReconstructedFile]) -> Vec<u8> {
    let mut crcs = Vec::with_capacity(files.len());
    let mut acc = ACCUMULATOR_SEED;

    for file in files {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&file.data);
        let crc = hasher.finalize();
        acc = acc.wrapping_shl(1).wrapping_add(crc);
        crcs.push(crc);
    }

    let mut out = ByteBuffer::with_capacity((files.len() + 1) * 4);
    for crc in crcs {
        out.put32(crc);
    }
    out.put32(acc);
    out.into_vec()
}
