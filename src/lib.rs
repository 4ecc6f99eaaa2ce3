mod node;

// Modules
pub mod classification;
pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod library;
pub mod probability;
pub mod tag;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classification::{classify, Classification};
pub use config::TreeConfig;
pub use document::{Document, DocumentKind, DocumentSet};
pub use errors::TagTreeError;
pub use library::{Library, UseChange};
pub use node::TreeNode;
pub use tag::Tag;
pub use tree::StructuralTree;
