//! Archive container codec: many identified sub-files packed into one blob,
//! optionally bzip2-compressed per-file or as a single combined stream.

mod bzip2_framing;

use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// How an archive's payload is compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionScheme {
    /// Each sub-file is bzip2-compressed independently.
    PerFile,
    /// The whole index+data payload is bzip2-compressed as one stream.
    Whole,
}

/// A single named entry inside an archive.
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    identifier: u32,
    data: Vec<u8>,
}

impl ArchiveFile {
    #[must_use]
    pub fn identifier(&self) -> u32 {
        self.identifier
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// An ordered collection of [`ArchiveFile`] entries.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    files: Vec<ArchiveFile>,
}

impl Archive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files(&self) -> &[ArchiveFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add a file. Fails without mutating the archive if `identifier` is
    /// already present.
    pub fn add_file(&mut self, identifier: u32, data: Vec<u8>) -> Result<&ArchiveFile> {
        if self.files.iter().any(|f| f.identifier == identifier) {
            return Err(Error::DuplicateIdentifier(identifier));
        }
        self.files.push(ArchiveFile { identifier, data });
        let idx = self.files.len() - 1;
        Ok(&self.files[idx])
    }

    #[must_use]
    pub fn get_file(&self, identifier: u32) -> Option<&ArchiveFile> {
        self.files.iter().find(|f| f.identifier == identifier)
    }

    pub fn remove_file(&mut self, identifier: u32) -> Option<ArchiveFile> {
        let pos = self.files.iter().position(|f| f.identifier == identifier)?;
        Some(self.files.remove(pos))
    }

    /// Encode this archive into its on-wire byte representation.
    pub fn encode(&self, scheme: CompressionScheme) -> Result<Vec<u8>> {
        let num_files = self.files.len();

        let mut stored: Vec<Vec<u8>> = Vec::with_capacity(num_files);
        for file in &self.files {
            let bytes = match scheme {
                CompressionScheme::PerFile => bzip2_framing::compress(&file.data)?,
                CompressionScheme::Whole => file.data.clone(),
            };
            stored.push(bytes);
        }

        let index_block_len = 2 + num_files * (4 + 3 + 3);
        let data_block_len: usize = stored.iter().map(Vec::len).sum();

        let mut index_buf = ByteBuffer::with_capacity(index_block_len);
        index_buf.put16(u16::try_from(num_files).unwrap_or(u16::MAX));
        for (file, stored_bytes) in self.files.iter().zip(&stored) {
            index_buf.put32(file.identifier);
            index_buf.put24(u32::try_from(file.data.len()).unwrap_or(u32::MAX));
            index_buf.put24(u32::try_from(stored_bytes.len()).unwrap_or(u32::MAX));
        }

        let mut data_buf = ByteBuffer::with_capacity(data_block_len);
        for stored_bytes in &stored {
            data_buf.putn(stored_bytes);
        }

        let index_bytes = index_buf.into_vec();
        let data_bytes = data_buf.into_vec();

        let (final_len, actual_len, payload) = match scheme {
            CompressionScheme::PerFile => {
                let mut payload = index_bytes;
                payload.extend_from_slice(&data_bytes);
                let len = u32::try_from(payload.len()).unwrap_or(u32::MAX);
                (len, len, payload)
            }
            CompressionScheme::Whole => {
                let mut combined = index_bytes;
                combined.extend_from_slice(&data_bytes);
                let final_len = u32::try_from(combined.len()).unwrap_or(u32::MAX);
                let compressed = bzip2_framing::compress(&combined)?;
                let actual_len = u32::try_from(compressed.len()).unwrap_or(u32::MAX);
                (final_len, actual_len, compressed)
            }
        };

        debug!(
            num_files,
            final_len, actual_len, "encoded archive container"
        );

        let mut out = ByteBuffer::with_capacity(6 + payload.len());
        out.put24(final_len);
        out.put24(actual_len);
        out.putn(&payload);
        Ok(out.into_vec())
    }

    /// Decode an archive from its on-wire byte representation.
    pub fn decode(bytes: &[u8]) -> Result<Archive> {
        if bytes.len() < 6 {
            return Err(Error::TruncatedContainer {
                expected: 6,
                actual: bytes.len(),
            });
        }

        let mut buf = ByteBuffer::from_vec(bytes.to_vec());
        let final_len = buf.get24();
        let actual_len = buf.get24();

        let payload = buf.getn(actual_len as usize).ok_or(Error::TruncatedContainer {
            expected: actual_len as usize,
            actual: bytes.len().saturating_sub(6),
        })?;

        let whole = final_len != actual_len;
        let container_bytes = if whole {
            let decompressed = bzip2_framing::decompress(&payload)?;
            if decompressed.len() as u32 != final_len {
                return Err(Error::LengthMismatch {
                    expected: final_len as usize,
                    actual: decompressed.len(),
                });
            }
            decompressed
        } else {
            payload
        };

        let mut cbuf = ByteBuffer::from_vec(container_bytes);
        let num_files = cbuf.get16();
        trace!(num_files, whole, "decoding archive index block");

        let index_entries_len = num_files as usize * (4 + 3 + 3);
        let remaining = cbuf.capacity().saturating_sub(cbuf.position());
        if remaining < index_entries_len {
            return Err(Error::TruncatedContainer {
                expected: index_entries_len,
                actual: remaining,
            });
        }

        let mut entries = Vec::with_capacity(num_files as usize);
        for _ in 0..num_files {
            let identifier = cbuf.get32();
            let final_file_len = cbuf.get24();
            let actual_file_len = cbuf.get24();
            entries.push((identifier, final_file_len, actual_file_len));
        }

        let mut files = Vec::with_capacity(num_files as usize);
        for (identifier, final_file_len, actual_file_len) in entries {
            let stored = cbuf
                .getn(actual_file_len as usize)
                .ok_or(Error::TruncatedContainer {
                    expected: actual_file_len as usize,
                    actual: 0,
                })?;

            let data = if actual_file_len == final_file_len {
                stored
            } else {
                let decompressed = bzip2_framing::decompress(&stored)?;
                if decompressed.len() as u32 != final_file_len {
                    return Err(Error::LengthMismatch {
                        expected: final_file_len as usize,
                        actual: decompressed.len(),
                    });
                }
                decompressed
            };

            files.push(ArchiveFile { identifier, data });
        }

        Ok(Archive { files })
    }
}
