//! ENS namehash
//!
//! A name's node is derived by folding over its labels from the top-level
//! label down, starting at the root node:
//!
//! ```text
//! node("")         = 0x00..00
//! node(label.rest) = H(node(rest) ++ H(label))
//! ```
//!
//! Labels are hashed as their literal UTF-8 bytes. No normalization is
//! applied, so `Foo.eth` and `foo.eth` are different names.

use crate::hash_functions::{HashFunction, Keccak256};
use ens_types::{DomainName, Label, LabelHash, NameError, Node};
use tracing::trace;

/// Namehash over an arbitrary hash engine.
///
/// [`NameHasher::keccak`] is the Ethereum-compatible instance; the free
/// functions in this module all delegate to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHasher<H = Keccak256> {
    engine: H,
}

impl NameHasher<Keccak256> {
    pub const fn keccak() -> Self {
        Self { engine: Keccak256 }
    }
}

impl<H: HashFunction> NameHasher<H> {
    pub fn new(engine: H) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &H {
        &self.engine
    }

    pub fn labelhash(&self, label: &str) -> LabelHash {
        LabelHash(self.engine.hash_fixed(label.as_bytes()))
    }

    /// Node of `label.<parent>` given the parent's node and the label's hash.
    pub fn subnode(&self, parent: &Node, label: &LabelHash) -> Node {
        let mut data = [0u8; 64];
        data[..32].copy_from_slice(parent.as_bytes());
        data[32..].copy_from_slice(label.as_bytes());
        Node(self.engine.hash_fixed(&data))
    }

    pub fn namehash_name(&self, name: &DomainName) -> Node {
        name.labels()
            .iter()
            .rev()
            .fold(Node::ROOT, |node, label| {
                self.subnode(&node, &self.labelhash(label.as_str()))
            })
    }

    pub fn namehash(&self, name: &str) -> Result<Node, NameError> {
        let parsed = DomainName::parse(name)?;
        let node = self.namehash_name(&parsed);
        trace!(domain = name, %node, engine = self.engine.name(), "computed namehash");
        Ok(node)
    }

    /// Node of `label.<parent>`, hashing the label first.
    pub fn child(&self, parent: &Node, label: &Label) -> Node {
        self.subnode(parent, &self.labelhash(label.as_str()))
    }
}

/// Keccak-256 of a label's UTF-8 bytes (`web3.sha3(text=label)`).
pub fn labelhash(label: &str) -> LabelHash {
    NameHasher::keccak().labelhash(label)
}

/// `keccak256(parent ++ label)`.
pub fn subnode(parent: &Node, label: &LabelHash) -> Node {
    NameHasher::keccak().subnode(parent, label)
}

/// Namehash of an already parsed name.
pub fn namehash_name(name: &DomainName) -> Node {
    NameHasher::keccak().namehash_name(name)
}

/// Namehash of a dotted name.
///
/// Returns [`Node::ROOT`] for `""` and [`NameError::EmptyLabel`] for a
/// name with an empty label such as `foo..eth` or `.eth`.
pub fn namehash(name: &str) -> Result<Node, NameError> {
    NameHasher::keccak().namehash(name)
}
