use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a hex-encoded 32-byte hash.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NodeError {
    #[error("hash must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("hash payload is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Number of raw bytes in a node or label hash.
pub const HASH_BYTES: usize = 32;
/// Length of the hex payload, without the `0x` prefix.
pub const HASH_HEX_LENGTH: usize = HASH_BYTES * 2;

/// Encode 32 bytes as `0x`-prefixed lowercase hex.
pub fn encode_hash(bytes: &[u8; HASH_BYTES]) -> String {
    let mut encoded = String::with_capacity(2 + HASH_HEX_LENGTH);
    encoded.push_str("0x");
    encoded.push_str(&hex::encode(bytes));
    encoded
}

/// Decode a hex string into 32 bytes. The `0x` prefix is optional.
pub fn decode_hash(value: &str) -> Result<[u8; HASH_BYTES], NodeError> {
    let payload = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if payload.len() != HASH_HEX_LENGTH {
        return Err(NodeError::InvalidLength {
            expected: HASH_HEX_LENGTH,
            actual: payload.len(),
        });
    }

    let mut bytes = [0u8; HASH_BYTES];
    hex::decode_to_slice(payload, &mut bytes)?;
    Ok(bytes)
}

macro_rules! hash32 {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(pub [u8; HASH_BYTES]);

        impl $name {
            pub const fn new(bytes: [u8; HASH_BYTES]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; HASH_BYTES] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                encode_hash(&self.0)
            }
        }

        impl From<[u8; HASH_BYTES]> for $name {
            fn from(value: [u8; HASH_BYTES]) -> Self {
                Self(value)
            }
        }

        impl From<$name> for [u8; HASH_BYTES] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = NodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hash(s).map(Self)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_hex()
            }
        }

        impl TryFrom<String> for $name {
            type Error = NodeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

hash32! {
    /// Canonical 32-byte identifier of a domain name.
    ///
    /// Produced by namehash; [`Node::ROOT`] identifies the empty name.
    Node
}

hash32! {
    /// Keccak-256 of a single label's UTF-8 bytes.
    LabelHash
}

impl Node {
    /// The root node: 32 zero bytes.
    pub const ROOT: Node = Node([0u8; HASH_BYTES]);

    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::ROOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_NODE: &str = "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae";

    #[test]
    fn root_is_all_zeroes() {
        assert_eq!(Node::ROOT.as_bytes(), &[0u8; HASH_BYTES]);
        assert!(Node::default().is_root());
        assert_eq!(
            Node::ROOT.to_string(),
            format!("0x{}", "00".repeat(HASH_BYTES))
        );
    }

    #[test]
    fn parses_with_and_without_prefix() {
        let with: Node = ETH_NODE.parse().unwrap();
        let without: Node = ETH_NODE.trim_start_matches("0x").parse().unwrap();
        assert_eq!(with, without);
        assert_eq!(with.to_string(), ETH_NODE);
        assert!(!with.is_root());
    }

    #[test]
    fn uppercase_hex_accepted() {
        let upper = ETH_NODE.to_uppercase().replacen("0X", "0x", 1);
        let node: Node = upper.parse().unwrap();
        assert_eq!(node.to_string(), ETH_NODE);
    }

    #[test]
    fn invalid_length_rejected() {
        let err = "0x1234".parse::<Node>().unwrap_err();
        assert_eq!(
            err,
            NodeError::InvalidLength {
                expected: HASH_HEX_LENGTH,
                actual: 4
            }
        );
    }

    #[test]
    fn invalid_hex_rejected() {
        let bad = format!("0x{}", "zz".repeat(HASH_BYTES));
        let err = bad.parse::<LabelHash>().unwrap_err();
        assert_eq!(
            err,
            NodeError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        let node: Node = ETH_NODE.parse().unwrap();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, format!("\"{}\"", ETH_NODE));

        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);

        assert!(serde_json::from_str::<Node>("\"0xdead\"").is_err());
    }

    #[test]
    fn debug_names_the_type() {
        let hash = LabelHash::new([0xab; HASH_BYTES]);
        assert!(format!("{:?}", hash).starts_with("LabelHash(0xabab"));
    }
}
