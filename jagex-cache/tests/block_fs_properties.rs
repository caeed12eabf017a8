//! Property-based tests for block-chain reconstruction: for arbitrary
//! payload lengths, splitting the payload into 512-byte blocks and writing
//! a valid chain must always reconstruct byte-for-byte, and corrupting any
//! single block's position field must always yield an empty/invalid result.

use jagex_codec::buffer::ByteBuffer;
use proptest::prelude::*;

const BLOCK_SIZE: usize = 520;
const PAYLOAD_SIZE: usize = 512;

/// Lay `payload` out as a chain of blocks starting at block 1, all for
/// `(index_id, file_id)`, and return the backing data buffer plus the
/// index-table bytes that describe it.
fn build_chain(index_id: u8, file_id: u16, payload: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let num_blocks = payload.len().div_ceil(PAYLOAD_SIZE).max(usize::from(!payload.is_empty()));
    let mut data = vec![0u8; BLOCK_SIZE * (num_blocks + 1)];

    let mut offset = 0;
    for part in 0..num_blocks {
        let chunk_len = (payload.len() - offset).min(PAYLOAD_SIZE);
        let chunk = &payload[offset..offset + chunk_len];
        let block_num = part + 1;
        let next = if part + 1 < num_blocks { block_num + 1 } else { 0 };

        let mut buf = ByteBuffer::with_capacity(BLOCK_SIZE);
        buf.put16(file_id);
        buf.put16(u16::try_from(part).unwrap());
        buf.put24(u32::try_from(next).unwrap());
        buf.put8(index_id + 1);
        buf.putn(chunk);
        let block_bytes = buf.into_vec();
        data[block_num * BLOCK_SIZE..block_num * BLOCK_SIZE + block_bytes.len()]
            .copy_from_slice(&block_bytes);

        offset += chunk_len;
    }

    let first_block = if payload.is_empty() { 0 } else { 1 };
    let mut index_buf = ByteBuffer::with_capacity(6);
    index_buf.put24(u32::try_from(payload.len()).unwrap());
    index_buf.put24(u32::try_from(first_block).unwrap());

    (data, index_buf.into_vec())
}

proptest! {
    /// A correctly-laid-out chain always reconstructs the exact original bytes.
    #[test]
    fn valid_chain_reconstructs_exactly(payload in prop::collection::vec(any::<u8>(), 0..2000)) {
        let (data_bytes, index_bytes) = build_chain(3, 0, &payload);
        let mut data = ByteBuffer::from_vec(data_bytes);
        let mut index = ByteBuffer::from_vec(index_bytes);

        let result = jagex_cache::block_fs::reconstruct_file(&mut data, &mut index, 3, 0);
        prop_assert!(result.valid);
        prop_assert_eq!(result.data, payload);
    }

    /// Corrupting the file-part field of the second block in a two-block
    /// chain always aborts the reconstruction.
    #[test]
    fn corrupted_part_number_always_aborts(extra in 1usize..600) {
        let payload = vec![0x7Au8; PAYLOAD_SIZE + extra];
        let (mut data_bytes, index_bytes) = build_chain(0, 0, &payload);

        // Second block header starts right after its 520-byte slot begins;
        // the file-part field is bytes [2..4) of that header.
        let second_block_offset = 2 * BLOCK_SIZE;
        data_bytes[second_block_offset + 2] = 0xFF;
        data_bytes[second_block_offset + 3] = 0xFF;

        let mut data = ByteBuffer::from_vec(data_bytes);
        let mut index = ByteBuffer::from_vec(index_bytes);

        let result = jagex_cache::block_fs::reconstruct_file(&mut data, &mut index, 0, 0);
        prop_assert!(!result.valid);
    }
}
