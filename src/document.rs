//! Documents
//!
//! The weighted, tagged items that get classified, and the path-unique
//! collection they are grouped in.
use crate::errors::TagTreeError;
use crate::tag::Tag;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// The category a document belongs to.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Image,
    Audio,
    Video,
    Text,
    Program,
}

impl FromStr for DocumentKind {
    type Err = TagTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(DocumentKind::Image),
            "audio" => Ok(DocumentKind::Audio),
            "video" => Ok(DocumentKind::Video),
            "text" => Ok(DocumentKind::Text),
            "program" => Ok(DocumentKind::Program),
            _ => Err(TagTreeError::ParseString(
                s.to_string(),
                "DocumentKind".to_string(),
                items_to_strings(vec!["image", "audio", "video", "text", "program"]),
            )),
        }
    }
}

/// A document with its tags and the number of times it was used.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    path: String,
    kind: DocumentKind,
    tags: BTreeSet<Tag>,
    uses: u32,
}

impl Document {
    /// Create a document. Tags are expected to be normalized for the kind already.
    pub fn new(path: impl Into<String>, kind: DocumentKind, tags: impl IntoIterator<Item = Tag>, uses: u32) -> Self {
        Document {
            path: path.into(),
            kind,
            tags: tags.into_iter().collect(),
            uses,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn uses(&self) -> u32 {
        self.uses
    }

    /// Whether the document holds exactly this tag.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the document holds any tag with this identifier.
    pub fn has_identifier(&self, identifier: &str) -> bool {
        self.tags.iter().any(|t| t.identifier() == identifier)
    }

    /// Look up the value stored for `identifier`.
    ///
    /// A document can hold several values for one identifier, in which case
    /// there is no single answer and `InconsistentTagSet` is returned.
    pub fn value_of(&self, identifier: &str) -> Result<Option<&str>, TagTreeError> {
        let mut values = self.tags.iter().filter(|t| t.identifier() == identifier);
        match (values.next(), values.next()) {
            (None, _) => Ok(None),
            (Some(t), None) => Ok(Some(t.value())),
            (Some(_), Some(_)) => Err(TagTreeError::InconsistentTagSet(
                self.path.clone(),
                identifier.to_string(),
            )),
        }
    }

    fn set_uses(&mut self, uses: u32) -> u32 {
        std::mem::replace(&mut self.uses, uses)
    }
}

/// An insertion ordered collection of documents with unique paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    /// Collect documents into a set, rejecting repeated paths.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Result<Self, TagTreeError> {
        let mut set = DocumentSet::default();
        for document in documents {
            set.push(document)?;
        }
        Ok(set)
    }

    /// Append a document, unless one with the same path is already present.
    pub fn push(&mut self, document: Document) -> Result<(), TagTreeError> {
        if self.position(document.path()).is_some() {
            return Err(TagTreeError::DuplicatePath(document.path));
        }
        self.documents.push(document);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.path() == path)
    }

    pub fn get(&self, path: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.path() == path)
    }

    /// References to every document, in insertion order.
    pub fn as_refs(&self) -> Vec<&Document> {
        self.documents.iter().collect()
    }

    /// References to the documents at `index`, in the order of `index`.
    pub fn select(&self, index: &[usize]) -> Vec<&Document> {
        index.iter().map(|i| &self.documents[*i]).collect()
    }

    /// Set the uses of the document at `path`, returning the previous value.
    pub fn change_uses(&mut self, path: &str, uses: u32) -> Result<u32, TagTreeError> {
        self.documents
            .iter_mut()
            .find(|d| d.path() == path)
            .map(|d| d.set_uses(uses))
            .ok_or_else(|| TagTreeError::UnknownDocument(path.to_string()))
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
