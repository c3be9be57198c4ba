//! Core types shared by the ENS crates.
//!
//! A [`DomainName`] is an ordered list of [`Label`]s, most significant last.
//! Hashing a name yields a [`Node`]; hashing a single label yields a
//! [`LabelHash`]. Both are plain 32-byte values rendered as `0x`-prefixed hex.

pub mod name;
pub mod node;

pub use name::*;
pub use node::*;
