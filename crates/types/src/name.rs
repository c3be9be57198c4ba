//! Dotted domain names and their labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing names and labels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A non-root name contained an empty label (leading, trailing or doubled dot).
    #[error("malformed name {name:?}: empty label at position {index}")]
    EmptyLabel { name: String, index: usize },

    #[error("label {label:?} must not contain '.'")]
    InvalidLabel { label: String },
}

pub type Result<T> = std::result::Result<T, NameError>;

/// One dot-delimited segment of a domain name.
///
/// Labels are taken as literal UTF-8; no case folding or other
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(NameError::EmptyLabel {
                name: label,
                index: 0,
            });
        }
        if label.contains('.') {
            return Err(NameError::InvalidLabel { label });
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Label {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0
    }
}

/// A domain name as an ordered list of labels, e.g. `foo.eth` = `[foo, eth]`.
///
/// The empty string is the root and has no labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName {
    labels: Vec<Label>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    /// Split `name` on `.` into labels.
    ///
    /// Any empty label in a non-empty name is rejected rather than hashed.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Ok(Self::root());
        }

        let labels = name
            .split('.')
            .enumerate()
            .map(|(index, part)| {
                if part.is_empty() {
                    Err(NameError::EmptyLabel {
                        name: name.to_string(),
                        index,
                    })
                } else {
                    Ok(Label(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels })
    }

    /// Labels left to right as written; the top-level label is last.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_string_is_root() {
        let root = DomainName::parse("").unwrap();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn labels_keep_written_order() {
        let name: DomainName = "foo.eth".parse().unwrap();
        let labels: Vec<&str> = name.labels().iter().map(Label::as_str).collect();
        assert_eq!(labels, vec!["foo", "eth"]);
    }

    #[test]
    fn empty_labels_rejected() {
        for (input, index) in [(".eth", 0), ("foo.", 1), ("foo..eth", 1), (".", 0)] {
            let err = DomainName::parse(input).unwrap_err();
            assert_eq!(
                err,
                NameError::EmptyLabel {
                    name: input.to_string(),
                    index
                },
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn label_rejects_dots_and_empty() {
        assert!(matches!(
            Label::new("a.b"),
            Err(NameError::InvalidLabel { .. })
        ));
        assert!(matches!(Label::new(""), Err(NameError::EmptyLabel { .. })));
    }

    #[test]
    fn case_is_preserved() {
        let name = DomainName::parse("Foo.ETH").unwrap();
        assert_eq!(name.to_string(), "Foo.ETH");
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let name = DomainName::parse("sub.foo.eth").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"sub.foo.eth\"");
        let back: DomainName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
        assert!(serde_json::from_str::<DomainName>("\"foo..eth\"").is_err());
    }

    proptest! {
        #[test]
        fn split_and_rejoin_reproduces_input(
            labels in prop::collection::vec("[a-z0-9-]{1,12}", 1..6),
        ) {
            let input = labels.join(".");
            let name = DomainName::parse(&input).unwrap();
            prop_assert_eq!(name.len(), labels.len());
            prop_assert_eq!(name.to_string(), input);
        }
    }
}
