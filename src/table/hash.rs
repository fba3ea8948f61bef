//! Bucket addressing.

/// Seed of the djb2 rolling hash.
pub const DJB2_SEED: u64 = 5381;

/// djb2 over raw bytes: `hash = hash * 33 + byte`, wrapping on overflow.
#[inline]
pub fn hash_djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

/// Bucket a URL lands in for a table of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero; the table guarantees this at construction.
#[inline]
pub fn bucket_index(url: &[u8], bucket_count: usize) -> usize {
    (hash_djb2(url) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hashes_to_seed() {
        assert_eq!(hash_djb2(b""), 5381);
    }

    #[test]
    fn test_known_values() {
        // 5381 * 33 + 'a'
        assert_eq!(hash_djb2(b"a"), 177_670);
        // 177670 * 33 + 'b'
        assert_eq!(hash_djb2(b"ab"), 5_863_208);
        assert_eq!(
            hash_djb2(b"/a"),
            5381 * 33 * 33 + u64::from(b'/') * 33 + u64::from(b'a')
        );
    }

    #[test]
    fn test_long_input_wraps_instead_of_overflowing() {
        let long = vec![0xffu8; 4096];
        let expected = long.iter().fold(DJB2_SEED, |h, &b| {
            h.wrapping_mul(33).wrapping_add(u64::from(b))
        });
        assert_eq!(hash_djb2(&long), expected);
    }

    #[test]
    fn test_bucket_index_is_in_range_and_stable() {
        for bucket_count in [1usize, 2, 7, 1024, 100_000] {
            for url in [&b"/"[..], b"/index.html", b"/a/b/c?d=e", b""] {
                let index = bucket_index(url, bucket_count);
                assert!(index < bucket_count);
                assert_eq!(index, bucket_index(url, bucket_count));
            }
        }
    }

    #[test]
    fn test_single_bucket_maps_everything_to_zero() {
        assert_eq!(bucket_index(b"/x", 1), 0);
        assert_eq!(bucket_index(b"/y", 1), 0);
    }

    #[test]
    fn test_distribution_spreads_sequential_paths() {
        let bucket_count = 64;
        let mut used = vec![false; bucket_count];
        for i in 0..1_000 {
            used[bucket_index(format!("/item/{i}").as_bytes(), bucket_count)] = true;
        }
        let occupied = used.iter().filter(|&&u| u).count();
        assert!(occupied > bucket_count / 2, "only {occupied} buckets used");
    }
}
