//! Tree Configuration
//!
//! Parameters controlling when a node stops splitting and how gains are
//! written to the gain trace.
use crate::constants::{GAIN_PRECISION, MINIMUM_INFORMATION_GAIN};
use crate::errors::TagTreeError;
use crate::utils::validate_positive_float_parameter;
use serde::{Deserialize, Serialize};

fn default_min_information_gain() -> f64 {
    MINIMUM_INFORMATION_GAIN
}
fn default_gain_precision() -> usize {
    GAIN_PRECISION
}

/// Configuration for a [`StructuralTree`](crate::tree::StructuralTree).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Identifiers gaining less than this many bits do not split a node.
    #[serde(default = "default_min_information_gain")]
    pub min_information_gain: f64,
    /// Decimal places of the gains in the gain trace.
    #[serde(default = "default_gain_precision")]
    pub gain_precision: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            min_information_gain: MINIMUM_INFORMATION_GAIN,
            gain_precision: GAIN_PRECISION,
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), TagTreeError> {
        validate_positive_float_parameter(self.min_information_gain, "min_information_gain")?;
        if self.gain_precision > 15 {
            return Err(TagTreeError::InvalidParameter(
                "gain_precision".to_string(),
                "at most 15 decimal places".to_string(),
                self.gain_precision.to_string(),
            ));
        }
        Ok(())
    }

    /// Dump the configuration as a json object.
    pub fn json_dump(&self) -> Result<String, TagTreeError> {
        serde_json::to_string(self).map_err(|e| TagTreeError::UnableToWrite(e.to_string()))
    }

    /// Load and validate a configuration from a json string.
    ///
    /// * `json_str` - String object, which can be deserialized to a config.
    pub fn from_json(json_str: &str) -> Result<Self, TagTreeError> {
        let config =
            serde_json::from_str::<Self>(json_str).map_err(|e| TagTreeError::UnableToRead(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
