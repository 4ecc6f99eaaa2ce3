//! Library
//!
//! Holds the document sets loaded so far, addressed by the id they were
//! registered under, and applies use changes to their documents.
use crate::classification::{classify, Classification};
use crate::config::TreeConfig;
use crate::document::DocumentSet;
use crate::errors::TagTreeError;
use log::info;
use std::fmt;

/// The outcome of changing the uses of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseChange {
    pub path: String,
    pub previous: u32,
    pub current: u32,
}

impl fmt::Display for UseChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Change {} to {} for {}", self.previous, self.current, self.path)
    }
}

/// Registry of document sets, and the configuration used to classify them.
#[derive(Debug, Clone, Default)]
pub struct Library {
    sets: Vec<DocumentSet>,
    config: TreeConfig,
}

impl Library {
    pub fn new() -> Self {
        Library::default()
    }

    pub fn with_config(config: TreeConfig) -> Result<Self, TagTreeError> {
        config.validate()?;
        Ok(Library {
            sets: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Register a document set, returning its id. Ids count up from zero.
    pub fn add_set(&mut self, documents: DocumentSet) -> usize {
        self.sets.push(documents);
        let id = self.sets.len() - 1;
        info!("Registered document set {} with {} documents.", id, self.sets[id].len());
        id
    }

    pub fn set(&self, id: usize) -> Result<&DocumentSet, TagTreeError> {
        self.sets.get(id).ok_or(TagTreeError::UnknownDocumentSet(id))
    }

    /// Set the uses of the document at `path` in set `id`.
    pub fn change_uses(&mut self, id: usize, path: &str, uses: u32) -> Result<UseChange, TagTreeError> {
        let set = self.sets.get_mut(id).ok_or(TagTreeError::UnknownDocumentSet(id))?;
        let previous = set.change_uses(path, uses)?;
        Ok(UseChange {
            path: path.to_string(),
            previous,
            current: uses,
        })
    }

    /// Classify set `id` with the library's configuration.
    pub fn classify(&self, id: usize) -> Result<Classification, TagTreeError> {
        classify(self.set(id)?, &self.config)
    }
}
