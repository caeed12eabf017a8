//! Headerless bzip2 framing.
//!
//! The on-disk format omits the 4-byte `BZh1` magic that a standard bzip2
//! stream starts with. Compression strips it after a normal single-shot
//! encode; decompression synthesises it before handing the stream to a
//! standard decoder.

use crate::error::{Error, Result};
use bzip2::Compression;
use bzip2::read::{BzDecoder, BzEncoder};
use std::io::Read;

const BZIP2_MAGIC: [u8; 4] = *b"BZh1";

/// Compress `data` as a single-shot bzip2 stream at block size 100k-1, then
/// strip the leading magic.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = BzEncoder::new(data, Compression::new(1));
    let mut out = Vec::new();
    encoder.read_to_end(&mut out)?;
    if out.len() < BZIP2_MAGIC.len() || out[..BZIP2_MAGIC.len()] != BZIP2_MAGIC {
        return Err(Error::InvalidBzip2Stream);
    }
    Ok(out[BZIP2_MAGIC.len()..].to_vec())
}

/// Prepend the magic bzip2 expects and decompress in one shot.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut framed = Vec::with_capacity(data.len() + BZIP2_MAGIC.len());
    framed.extend_from_slice(&BZIP2_MAGIC);
    framed.extend_from_slice(data);

    let mut decoder = BzDecoder::new(&framed[..]);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::Bzip2(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_bytes() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(20);
        let compressed = compress(&data).unwrap();
        assert_ne!(compressed[..BZIP2_MAGIC.len().min(compressed.len())], BZIP2_MAGIC[..]);
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn decompress_rejects_garbage() {
        let garbage = vec![0xFFu8; 16];
        assert!(decompress(&garbage).is_err());
    }

    #[test]
    fn round_trip_empty_input() {
        let compressed = compress(&[]).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }
}
