//! Name hash used to derive archive-file identifiers from byte strings.

const MULTIPLIER: u32 = 61;

/// Hash `name` the same way the legacy client hashes null-terminated
/// filenames: `h = 0; for each byte b: h = 61 * h + b - 32`, wrapping on
/// overflow.
#[must_use]
pub fn hash_name(name: &[u8]) -> u32 {
    let mut h: u32 = 0;
    for &b in name {
        h = h
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(u32::from(b))
            .wrapping_sub(32);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(hash_name(b""), 0);
    }

    #[test]
    fn single_byte_hash() {
        // h = 0*61 + 'A' - 32 = 65 - 32 = 33
        assert_eq!(hash_name(b"A"), 33);
    }

    #[test]
    fn multi_byte_hash_matches_reference_computation() {
        let mut expected: u32 = 0;
        for &b in b"config" {
            expected = expected.wrapping_mul(61).wrapping_add(u32::from(b)).wrapping_sub(32);
        }
        assert_eq!(hash_name(b"config"), expected);
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(hash_name(b"model_1234"), hash_name(b"model_1234"));
    }
}
