//! Tags
//!
//! A tag is an immutable `identifier=value` pair attached to a document.
use crate::constants::{DEFINED_VALUE, UNDEFINED_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An attribute of a document. Equality and ordering are by identifier first,
/// then value, both case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Tag {
    identifier: String,
    value: String,
}

impl Tag {
    /// Create a tag. An empty value is stored as `undefined`.
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Tag {
            identifier: identifier.into(),
            value: if value.is_empty() {
                UNDEFINED_VALUE.to_string()
            } else {
                value
            },
        }
    }

    /// Create a tag that only marks its identifier as present.
    pub fn defined(identifier: impl Into<String>) -> Self {
        Tag::new(identifier, DEFINED_VALUE)
    }

    /// Create the tag selecting documents that lack `identifier`.
    pub fn undefined(identifier: impl Into<String>) -> Self {
        Tag::new(identifier, UNDEFINED_VALUE)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_undefined(&self) -> bool {
        self.value == UNDEFINED_VALUE
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.identifier, self.value)
    }
}
