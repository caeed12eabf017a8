//! The top-level `Cache`: owns every index's reconstructed files, loaded
//! once at open time.

use crate::block_fs;
use crate::error::{Error, Result};
use crate::io;
use crate::types::{INDEX_ENTRY_SIZE, ReconstructedFile};
use jagex_codec::buffer::ByteBuffer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A cache is a set of indices; each index owns a dense array of files
/// addressable by id. The entire block file system is materialised in
/// memory at open time.
#[derive(Debug, Default)]
pub struct Cache {
    indices: Vec<Vec<ReconstructedFile>>,
}

impl Cache {
    /// Open a cache from explicit index file paths (in index-id order) and
    /// one data file path.
    pub fn open_from_files<P: AsRef<Path>>(index_paths: &[P], data_path: P) -> Result<Self> {
        let data_bytes = io::read_file(data_path.as_ref())?;
        let num_blocks = data_bytes.len() / crate::types::BLOCK_SIZE;
        info!(
            data_bytes = data_bytes.len(),
            num_blocks, "loaded cache data file"
        );
        let mut data_buf = ByteBuffer::from_vec(data_bytes);

        let mut indices = Vec::with_capacity(index_paths.len());
        for (index_id, path) in index_paths.iter().enumerate() {
            let index_bytes = io::read_file(path.as_ref())?;
            let num_files = index_bytes.len() / INDEX_ENTRY_SIZE;
            let mut index_buf = ByteBuffer::from_vec(index_bytes);

            let mut files = Vec::with_capacity(num_files);
            for file_id in 0..num_files {
                let index_id_u8 = u8::try_from(index_id).unwrap_or(u8::MAX);
                let file_id_u16 = u16::try_from(file_id).unwrap_or(u16::MAX);
                files.push(block_fs::reconstruct_file(
                    &mut data_buf,
                    &mut index_buf,
                    index_id_u8,
                    file_id_u16,
                ));
            }
            debug!(index_id, num_files, "reconstructed index");
            indices.push(files);
        }

        Ok(Self { indices })
    }

    /// Open a cache from a directory: files whose names contain `"idx"` are
    /// sorted lexicographically to become the index tables; among files
    /// whose names contain `"dat"`, the lexicographically last one is the
    /// data file.
    pub fn open_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = io::directory_entries(dir)?;
        entries.sort();

        let index_paths: Vec<PathBuf> = entries
            .iter()
            .filter(|name| name.contains("idx"))
            .map(|name| dir.join(name))
            .collect();

        let data_name = entries
            .iter()
            .filter(|name| name.contains("dat"))
            .next_back()
            .ok_or_else(|| Error::NoDataFile(dir.display().to_string()))?;

        if index_paths.is_empty() {
            return Err(Error::NoIndexFiles(dir.display().to_string()));
        }

        Self::open_from_files(&index_paths, dir.join(data_name))
    }

    #[must_use]
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn num_files(&self, index: usize) -> usize {
        self.indices.get(index).map_or(0, Vec::len)
    }

    /// Look up a reconstructed file's bytes.
    ///
    /// The legacy client's bounds check is `index > num_indices || file >
    /// num_files[index]` (strict `>`, not `>=`), which accepts one id past
    /// the end of each table. That one-past-end slot never held valid data
    /// in the original either (it was an out-of-bounds C array read); since
    /// Rust cannot replicate that safely, this returns `None` there instead
    /// of undefined behaviour, while still running the same guard shape.
    #[must_use]
    pub fn get_file(&self, index: usize, file: usize) -> Option<&[u8]> {
        if index > self.indices.len() {
            return None;
        }
        let files = self.indices.get(index)?;
        if file > files.len() {
            return None;
        }
        let entry = files.get(file)?;
        entry.valid.then_some(entry.data.as_slice())
    }

    /// Build the per-index CRC digest described in [`crate::crc`].
    #[must_use]
    pub fn build_crc_digest(&self, index: usize) -> Option<Vec<u8>> {
        let files = self.indices.get(index)?;
        Some(crate::crc::build_digest(files))
    }
}
