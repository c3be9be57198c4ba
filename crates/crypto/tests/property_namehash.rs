use ens_crypto::{labelhash, namehash, subnode, NameHasher};
use ens_types::{DomainName, Node};
use proptest::prelude::*;

// Property-based tests for namehash derivation

fn arbitrary_label() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9]{1,16}",
        "[a-z][a-z0-9-]{0,20}[a-z0-9]",
        "\\PC{1,8}".prop_filter("labels cannot contain dots", |s| !s.contains('.')),
    ]
}

fn arbitrary_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arbitrary_label(), 1..6)
}

proptest! {
    #[test]
    fn child_node_composes_from_parent(
        label in arbitrary_label(),
        parent in arbitrary_labels(),
    ) {
        let parent_name = parent.join(".");
        let child_name = format!("{}.{}", label, parent_name);

        let parent_node = namehash(&parent_name).unwrap();
        let child_node = namehash(&child_name).unwrap();

        prop_assert_eq!(child_node, subnode(&parent_node, &labelhash(&label)));
    }
}

proptest! {
    #[test]
    fn namehash_is_deterministic(labels in arbitrary_labels()) {
        let name = labels.join(".");
        prop_assert_eq!(namehash(&name).unwrap(), namehash(&name).unwrap());
    }
}

proptest! {
    #[test]
    fn non_root_names_never_hash_to_root(labels in arbitrary_labels()) {
        let node = namehash(&labels.join(".")).unwrap();
        prop_assert_ne!(node, Node::ROOT);
    }
}

proptest! {
    #[test]
    fn parsed_and_string_forms_agree(labels in arbitrary_labels()) {
        let name = labels.join(".");
        let parsed = DomainName::parse(&name).unwrap();
        prop_assert_eq!(parsed.to_string(), name.clone());
        prop_assert_eq!(
            NameHasher::keccak().namehash_name(&parsed),
            namehash(&name).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn leading_or_trailing_dot_is_rejected(labels in arbitrary_labels()) {
        let name = labels.join(".");
        let leading = format!(".{}", name);
        let trailing = format!("{}.", name);
        prop_assert!(namehash(&leading).is_err());
        prop_assert!(namehash(&trailing).is_err());
    }
}

#[test]
fn node_hex_roundtrip_for_registered_name() {
    let node = namehash("newname.eth").unwrap();
    let parsed: Node = node.to_string().parse().unwrap();
    assert_eq!(parsed, node);
}
