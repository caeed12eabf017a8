//! Block-chain traversal: reconstruct one logical file from linked 520-byte
//! blocks, validating each link's embedded metadata against expectations.

use crate::types::{BLOCK_PAYLOAD_SIZE, BLOCK_SIZE, INDEX_ENTRY_SIZE, IndexEntry, ReconstructedFile};
use jagex_codec::buffer::ByteBuffer;
use tracing::warn;

fn read_index_entry(index_table: &mut ByteBuffer, file_id: usize) -> Option<IndexEntry> {
    let num_files = index_table.capacity() / INDEX_ENTRY_SIZE;
    if file_id > num_files {
        return None;
    }
    index_table.seek(file_id * INDEX_ENTRY_SIZE);
    let length = index_table.get24();
    let first_block = index_table.get24();
    Some(IndexEntry { length, first_block })
}

/// Reconstruct the file at `(index_id, file_id)` by walking its block chain.
///
/// Any validation failure (an out-of-range block pointer, a block whose
/// embedded file id/part/index id doesn't match, or a chain that ends before
/// the declared length is covered) yields `ReconstructedFile { valid: false, .. }`
/// rather than partial data.
pub fn reconstruct_file(
    data_blocks: &mut ByteBuffer,
    index_table: &mut ByteBuffer,
    index_id: u8,
    file_id: u16,
) -> ReconstructedFile {
    let Some(entry) = read_index_entry(index_table, file_id as usize) else {
        return ReconstructedFile::default();
    };

    if entry.first_block == 0 {
        return ReconstructedFile {
            data: Vec::new(),
            valid: true,
        };
    }

    let num_blocks = data_blocks.capacity() / BLOCK_SIZE;
    let mut out = vec![0u8; entry.length as usize];
    let mut to_read = entry.length as usize;
    let mut write_cursor = 0usize;
    let mut file_part: u16 = 0;
    let mut current = entry.first_block;

    while current != 0 {
        if current as usize > num_blocks {
            warn!(file_id, index_id, current, "block pointer out of range");
            return ReconstructedFile::default();
        }

        data_blocks.seek(current as usize * BLOCK_SIZE);
        let block_file_id = data_blocks.get16();
        let block_file_pos = data_blocks.get16();
        let next_block = data_blocks.get24();
        let block_index_id_plus_one = data_blocks.get8();

        let read_this = to_read.min(BLOCK_PAYLOAD_SIZE);

        let block_index_id = block_index_id_plus_one.wrapping_sub(1);
        if block_file_id != file_id || block_file_pos != file_part || block_index_id != index_id {
            warn!(
                file_id,
                index_id, current, block_file_id, block_file_pos, block_index_id_plus_one,
                "block chain validation failed"
            );
            return ReconstructedFile::default();
        }

        let Some(bytes) = data_blocks.getn(read_this) else {
            return ReconstructedFile::default();
        };
        out[write_cursor..write_cursor + read_this].copy_from_slice(&bytes);

        write_cursor += read_this;
        to_read -= read_this;
        current = next_block;
        file_part += 1;
    }

    if to_read > 0 {
        warn!(file_id, index_id, to_read, "block chain ended early");
        return ReconstructedFile::default();
    }

    ReconstructedFile {
        data: out,
        valid: true,
    }
}
