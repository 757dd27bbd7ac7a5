//! BLAKE2b-256 hashing utilities.
//!
//! The ledger identifies transactions by the 32-byte BLAKE2b digest of their
//! RLP encoding. Keyed hashing is used to derive asset addresses.

use blake2::digest::consts::U32;
use blake2::digest::{Digest, KeyInit, Mac};
use blake2::{Blake2b, Blake2bMac};

use crate::error::CryptoError;

type Blake2b256 = Blake2b<U32>;
type Blake2bMac256 = Blake2bMac<U32>;

/// Digest length in bytes.
pub const BLAKE256_LEN: usize = 32;

/// Longest key accepted by keyed BLAKE2b.
pub const MAX_KEY_LEN: usize = 64;

/// Compute the BLAKE2b-256 digest of `data`.
pub fn blake256(data: &[u8]) -> [u8; BLAKE256_LEN] {
    let mut hasher = IncrementalHasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Compute the keyed BLAKE2b-256 digest of `data`.
///
/// Keys longer than [`MAX_KEY_LEN`] bytes are rejected.
pub fn blake256_with_key(data: &[u8], key: &[u8]) -> Result<[u8; BLAKE256_LEN], CryptoError> {
    let mut mac = <Blake2bMac256 as KeyInit>::new_from_slice(key)
        .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
    Mac::update(&mut mac, data);
    let mut out = [0u8; BLAKE256_LEN];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Incremental hasher for streaming hash computation
pub struct IncrementalHasher {
    hasher: Blake2b256,
}

impl IncrementalHasher {
    /// Create a new incremental hasher
    pub fn new() -> Self {
        Self {
            hasher: Blake2b256::new(),
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    /// Finalize and return the digest
    pub fn finalize(self) -> [u8; BLAKE256_LEN] {
        let mut out = [0u8; BLAKE256_LEN];
        out.copy_from_slice(&self.hasher.finalize());
        out
    }
}

impl Default for IncrementalHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blake256_known_vectors() {
        assert_eq!(
            hex::encode(blake256(b"")),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
        assert_eq!(
            hex::encode(blake256(b"hello world")),
            "256c83b297114d201b30179f3f0ef0cace9783622da5974326b436178aeef610"
        );
    }

    #[test]
    fn test_blake256_with_key_known_vector() {
        let digest = blake256_with_key(b"hello world", b"codechain").unwrap();
        assert_eq!(
            hex::encode(digest),
            "cb9eef30d2911673694d8e49fb348e54736b588c4aaf96304ed9ff595d8c938f"
        );
    }

    #[test]
    fn test_keyed_differs_from_plain() {
        let plain = blake256(b"data");
        let keyed = blake256_with_key(b"data", &[0u8; 16]).unwrap();
        assert_ne!(plain, keyed);

        // Different keys, different digests
        let other = blake256_with_key(b"data", &[1u8; 16]).unwrap();
        assert_ne!(keyed, other);
    }

    #[test]
    fn test_key_too_long() {
        let key = [0u8; MAX_KEY_LEN + 1];
        assert_eq!(
            blake256_with_key(b"data", &key),
            Err(CryptoError::InvalidKeyLength(65))
        );
        assert!(blake256_with_key(b"data", &[0u8; MAX_KEY_LEN]).is_ok());
    }

    proptest! {
        #[test]
        fn prop_incremental_matches_one_shot(data in proptest::collection::vec(any::<u8>(), 0..512), split in 0usize..512) {
            let split = split.min(data.len());
            let mut hasher = IncrementalHasher::new();
            hasher.update(&data[..split]);
            hasher.update(&data[split..]);
            prop_assert_eq!(hasher.finalize(), blake256(&data));
        }
    }
}
