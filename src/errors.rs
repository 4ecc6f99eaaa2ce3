//! Errors
//!
//! Custom error types used throughout the `tagtree` crate.
use thiserror::Error;

/// Errors that can occur while building or querying a structural tree.
#[derive(Debug, Error, PartialEq)]
pub enum TagTreeError {
    /// The documents passed to a probability computation carry no uses at all.
    #[error("The documents have no accumulated uses, so no probability distribution is defined.")]
    DegenerateDistribution,
    /// A tree was requested for a document set without documents.
    #[error("Unable to build a structural tree from an empty document set.")]
    EmptyCollection,
    /// First value is the document path, second the identifier holding several values.
    #[error("Document {0} holds more than one value for tag {1}.")]
    InconsistentTagSet(String, String),
    /// Two documents of one set share a path.
    #[error("Document path {0} occurs more than once.")]
    DuplicatePath(String),
    /// No document set is registered under the id.
    #[error("No document set with id {0} found.")]
    UnknownDocumentSet(usize),
    /// No document with the path exists in the set.
    #[error("No document with path {0} found.")]
    UnknownDocument(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to serialize a value.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Unable to deserialize a value.
    #[error("Unable to read: {0}")]
    UnableToRead(String),
}
