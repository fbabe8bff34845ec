//! Deterministic hashing used by the feature store and IRI minting.
//!
//! Two distinct hashes live here because they serve different contracts:
//!
//! - [`fnv1a_32`] hashes a feature string down into a dense bucket id for the
//!   parser's weight tables. Collisions are tolerable (two features sharing a
//!   bucket just share a weight) so a fast, non-cryptographic hash is the
//!   right tool.
//! - [`content_hash12`] derives the `hash12` suffix of a node IRI from the
//!   fields that determine that node's identity. Two builds over the same
//!   input must mint byte-identical IRIs, so this goes through SHA-256 rather
//!   than a hash chosen for speed.

use sha2::{Digest, Sha256};

/// Hashes `s` with 32-bit FNV-1a and reduces it into `[0, num_buckets)`.
///
/// Returns `None` when `num_buckets` is zero, signalling "use the feature
/// string verbatim instead of hashing" per the dependency parser's feature
/// store contract.
pub fn fnv1a_32(s: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    let mut hash = OFFSET_BASIS;
    for byte in s.as_bytes() {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Hashes `s` into a bucket index in `[0, num_buckets)`.
///
/// A `num_buckets` of zero means "do not hash": the caller should fall back
/// to keying weights by the feature string itself.
pub fn fnv1a_bucket(s: &str, num_buckets: u32) -> Option<u32> {
    if num_buckets == 0 {
        return None;
    }
    Some(fnv1a_32(s) % num_buckets)
}

/// Computes the first 12 hex characters of the SHA-256 digest of `parts`
/// joined with `\u{1f}` (unit separator), used as the `hash12` component of
/// a node IRI.
///
/// Joining with a control character rather than an empty string avoids
/// accidental collisions between e.g. `("ab", "c")` and `("a", "bc")`.
pub fn content_hash12(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update([0x1f]);
        }
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(12);
    for byte in digest.iter().take(6) {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_is_deterministic() {
        assert_eq!(fnv1a_32("nsubj"), fnv1a_32("nsubj"));
    }

    #[test]
    fn fnv1a_differs_for_different_inputs() {
        assert_ne!(fnv1a_32("nsubj"), fnv1a_32("obj"));
    }

    #[test]
    fn bucket_respects_range() {
        for feature in ["w0=the", "t0=DT", "w-1=doctor", "dist=3"] {
            let bucket = fnv1a_bucket(feature, 1000).unwrap();
            assert!(bucket < 1000);
        }
    }

    #[test]
    fn zero_buckets_means_no_hashing() {
        assert_eq!(fnv1a_bucket("anything", 0), None);
    }

    #[test]
    fn content_hash12_is_deterministic() {
        let a = content_hash12(&["Person", "doctor", "4"]);
        let b = content_hash12(&["Person", "doctor", "4"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn content_hash12_is_sensitive_to_part_boundaries() {
        let a = content_hash12(&["ab", "c"]);
        let b = content_hash12(&["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn content_hash12_differs_for_different_text() {
        let a = content_hash12(&["Person", "doctor"]);
        let b = content_hash12(&["Person", "patient"]);
        assert_ne!(a, b);
    }

    #[test]
    fn content_hash12_is_lowercase_hex() {
        let h = content_hash12(&["Entity", "x"]);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
