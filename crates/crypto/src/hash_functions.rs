//! Hash functions for ENS
//!
//! Ethereum's Keccak-256 uses the original Keccak padding and is NOT the
//! FIPS-202 SHA3-256. Both are provided so the difference stays visible;
//! only [`Keccak256`] is used for name hashing.

use sha3::Digest;

/// Trait for hash functions
pub trait HashFunction: Send + Sync {
    /// Hash input data and return the result
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self.hash_fixed(data).to_vec()
    }

    /// Hash input data and return a fixed-size array
    fn hash_fixed(&self, data: &[u8]) -> [u8; 32];

    /// Get the output size of the hash function
    fn output_size(&self) -> usize {
        32
    }

    /// Get the name of the hash function
    fn name(&self) -> &'static str;
}

fn digest_fixed<D: Digest>(data: &[u8]) -> [u8; 32] {
    let mut hasher = D::new();
    hasher.update(data);
    let hash = hasher.finalize();
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Keccak-256 as used by Ethereum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl Keccak256 {
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for Keccak256 {
    fn hash_fixed(&self, data: &[u8]) -> [u8; 32] {
        digest_fixed::<sha3::Keccak256>(data)
    }

    fn name(&self) -> &'static str {
        "Keccak256"
    }
}

/// FIPS-202 SHA3-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256;

impl Sha3_256 {
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for Sha3_256 {
    fn hash_fixed(&self, data: &[u8]) -> [u8; 32] {
        digest_fixed::<sha3::Sha3_256>(data)
    }

    fn name(&self) -> &'static str {
        "SHA3-256"
    }
}

/// Keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256.hash_fixed(data)
}

/// FIPS-202 SHA3-256 of `data`.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    Sha3_256.hash_fixed(data)
}
