//! CodeChain Crypto - Content hashing for the CodeChain SDK.
//!
//! This crate provides:
//! - BLAKE2b-256 hashing (transaction hashes)
//! - Keyed BLAKE2b-256 (asset address derivation)
//! - Incremental hashing over streamed input

pub mod hash;
pub mod error;

pub use hash::{blake256, blake256_with_key, IncrementalHasher, BLAKE256_LEN, MAX_KEY_LEN};
pub use error::CryptoError;
