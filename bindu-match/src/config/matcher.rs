//! Matcher section: tolerance and neighbor search strategy.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reference set size at which [`SearchStrategy::Auto`] switches to the R-tree.
pub const AUTO_INDEX_THRESHOLD: usize = 64;

/// How fuzzy queries look up reference points.
///
/// Every strategy yields identical results; only the cost differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Brute-force O(|A|·|B|) scan
    #[default]
    Linear,
    /// R-tree over the reference set
    SpatialIndex,
    /// R-tree once the reference set reaches [`AUTO_INDEX_THRESHOLD`] points
    Auto,
}

impl SearchStrategy {
    /// Whether a reference set of `reference_len` points gets an R-tree.
    pub fn uses_index(&self, reference_len: usize) -> bool {
        match self {
            SearchStrategy::Linear => false,
            SearchStrategy::SpatialIndex => true,
            SearchStrategy::Auto => reference_len >= AUTO_INDEX_THRESHOLD,
        }
    }
}

/// Matcher settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Tolerance radius. 0 selects exact matching.
    pub eps: f64,
    /// Neighbor search strategy for fuzzy queries
    pub search: SearchStrategy,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            eps: 0.0,
            search: SearchStrategy::Linear,
        }
    }
}

impl MatcherConfig {
    /// Config with the given tolerance and the default strategy
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            ..Default::default()
        }
    }

    /// Replace the search strategy
    pub fn search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// Check that `eps` is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        validate_eps(self.eps)
    }
}

/// Tolerance must be finite and `>= 0`.
pub(crate) fn validate_eps(eps: f64) -> Result<()> {
    if !eps.is_finite() {
        return Err(Error::InvalidInput(format!("eps must be finite, got {}", eps)));
    }
    if eps < 0.0 {
        return Err(Error::InvalidInput(format!(
            "eps must be non-negative, got {}",
            eps
        )));
    }
    Ok(())
}
