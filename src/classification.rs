//! Classification
//!
//! Builds a structural tree for a document set and returns both of its
//! textual renderings.
use crate::config::TreeConfig;
use crate::constants::ARTIFACT_SEPARATOR;
use crate::document::DocumentSet;
use crate::errors::TagTreeError;
use crate::tree::StructuralTree;
use crate::utils::strip_trailing_newline;
use std::fmt;

/// The gain trace and the classification listing of one document set.
/// Both are newline terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub gain_trace: String,
    pub listing: String,
}

/// Classify `documents`, building a tree and rendering it once.
pub fn classify(documents: &DocumentSet, config: &TreeConfig) -> Result<Classification, TagTreeError> {
    let mut tree = StructuralTree::new(documents, config.clone())?;
    let gain_trace = tree.build()?;
    let listing = tree.classification()?;
    Ok(Classification { gain_trace, listing })
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            strip_trailing_newline(&self.gain_trace),
            ARTIFACT_SEPARATOR,
            strip_trailing_newline(&self.listing)
        )
    }
}
