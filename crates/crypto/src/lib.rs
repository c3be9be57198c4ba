//! Hashing primitives for ENS names.
//!
//! [`hash_functions`] provides the hash engines, with [`Keccak256`] being the
//! one Ethereum uses. [`namehash`] folds Keccak-256 over the labels of a
//! dotted name to derive its [`Node`](ens_types::Node).

pub mod hash_functions;
pub mod namehash;

pub use hash_functions::{keccak256, sha3_256, HashFunction, Keccak256, Sha3_256};
pub use namehash::{labelhash, namehash, namehash_name, subnode, NameHasher};
