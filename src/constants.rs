/// Value of a tag whose identifier is absent from a document.
pub const UNDEFINED_VALUE: &str = "undefined";
/// Value of a tag constructed from an identifier alone.
pub const DEFINED_VALUE: &str = "defined";
/// Identifiers whose information gain is below this do not split a node.
pub const MINIMUM_INFORMATION_GAIN: f64 = 0.001;
/// Decimal places of the gains written to the gain trace.
pub const GAIN_PRECISION: usize = 2;
/// Separator between path segments in tag paths.
pub const PATH_SEPARATOR: &str = "/";
/// Separator between the gain trace and the classification listing.
pub const ARTIFACT_SEPARATOR: &str = "---";
