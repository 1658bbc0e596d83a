//! YAML match scenarios: two point sets plus matcher settings.
//!
//! ```yaml
//! name: shifted square
//! points_a: [[0, 0], [1, 0], [1, 1], [0, 1]]
//! points_b: [[0.05, 0.0], [1.02, 0.98]]
//! matcher:
//!   eps: 0.1
//! ```
//!
//! Coordinate rows are kept as plain number lists until
//! [`MatchScenario::into_matcher`] so that rows of the wrong length surface
//! as `InvalidInput` rather than as a YAML type error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::matcher::MatcherConfig;
use crate::core::PointSet;
use crate::error::Result;
use crate::matching::PointMatcher;

/// A reference set, a pattern set and matcher settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScenario {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Reference set A as `[x, y]` rows
    #[serde(default)]
    pub points_a: Vec<Vec<f64>>,
    /// Pattern set B as `[x, y]` rows
    #[serde(default)]
    pub points_b: Vec<Vec<f64>>,
    /// Matcher settings
    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl MatchScenario {
    /// Load a scenario from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate the point rows and build a matcher.
    pub fn into_matcher(self) -> Result<PointMatcher> {
        let reference = PointSet::from_coords(&self.points_a)?;
        let pattern = PointSet::from_coords(&self.points_b)?;
        PointMatcher::from_sets(reference, pattern, &self.matcher)
    }
}
