//! PointMatcher: exact and tolerance-based matching of a pattern set
//! against a reference set.

use log::{debug, trace};

use crate::config::{MatcherConfig, SearchStrategy, validate_eps};
use crate::core::{Point2D, PointSet};
use crate::error::Result;
use crate::render::{self, Canvas};

use super::linear::LinearSearch;
use super::spatial_index::SpatialIndex;
use super::traits::NeighborSearch;

/// Matching semantics selected by the tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// `eps == 0`: exact coordinate equality
    Exact,
    /// `eps > 0`: Euclidean distance within `eps`
    Fuzzy,
}

/// A pattern point paired with its nearest reference point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedPair {
    /// Index of the point in the pattern set B
    pub pattern_index: usize,
    /// Index of the nearest point in the reference set A
    pub reference_index: usize,
    /// Pattern point
    pub pattern: Point2D,
    /// Nearest reference point
    pub reference: Point2D,
    /// Euclidean distance between the two
    pub distance: f64,
}

/// Matches a pattern set B against a reference set A.
///
/// State is fixed at construction; every query is a pure read.
///
/// # Example
/// ```rust
/// use bindu_match::PointMatcher;
///
/// let matcher = PointMatcher::new(
///     [(0.0, 0.0), (1.0, 1.0)],
///     [(1.05, 1.05)],
///     0.1,
/// )?;
/// assert!(matcher.fuzzy_match());
/// assert!(!matcher.exact_match());
/// # Ok::<(), bindu_match::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct PointMatcher {
    reference: PointSet,
    pattern: PointSet,
    eps: f64,
    search: SearchStrategy,
}

impl PointMatcher {
    /// Create a matcher with tolerance `eps`.
    ///
    /// # Errors
    /// `InvalidInput` if a coordinate is not finite, or `eps` is negative or
    /// not finite.
    pub fn new<A, B, PA, PB>(points_a: A, points_b: B, eps: f64) -> Result<Self>
    where
        A: IntoIterator<Item = PA>,
        B: IntoIterator<Item = PB>,
        PA: Into<Point2D>,
        PB: Into<Point2D>,
    {
        Self::with_config(points_a, points_b, &MatcherConfig::with_eps(eps))
    }

    /// Create an exact matcher (`eps = 0`).
    pub fn exact<A, B, PA, PB>(points_a: A, points_b: B) -> Result<Self>
    where
        A: IntoIterator<Item = PA>,
        B: IntoIterator<Item = PB>,
        PA: Into<Point2D>,
        PB: Into<Point2D>,
    {
        Self::new(points_a, points_b, 0.0)
    }

    /// Create a matcher from raw points and a full matcher config.
    pub fn with_config<A, B, PA, PB>(
        points_a: A,
        points_b: B,
        config: &MatcherConfig,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = PA>,
        B: IntoIterator<Item = PB>,
        PA: Into<Point2D>,
        PB: Into<Point2D>,
    {
        let reference = PointSet::from_points(points_a)?;
        let pattern = PointSet::from_points(points_b)?;
        Self::from_sets(reference, pattern, config)
    }

    /// Create a matcher from already validated point sets.
    pub fn from_sets(
        reference: PointSet,
        pattern: PointSet,
        config: &MatcherConfig,
    ) -> Result<Self> {
        validate_eps(config.eps)?;
        // Fold -0.0 into 0.0
        let eps = if config.eps == 0.0 { 0.0 } else { config.eps };

        debug!(
            "PointMatcher: |A|={} |B|={} eps={} search={:?}",
            reference.len(),
            pattern.len(),
            eps,
            config.search
        );

        Ok(Self {
            reference,
            pattern,
            eps,
            search: config.search,
        })
    }

    /// Reference set A
    pub fn reference(&self) -> &PointSet {
        &self.reference
    }

    /// Pattern set B
    pub fn pattern(&self) -> &PointSet {
        &self.pattern
    }

    /// Tolerance radius
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Neighbor search strategy
    pub fn search(&self) -> SearchStrategy {
        self.search
    }

    /// Exact when `eps == 0`, fuzzy otherwise
    pub fn mode(&self) -> MatchMode {
        if self.eps > 0.0 {
            MatchMode::Fuzzy
        } else {
            MatchMode::Exact
        }
    }

    /// Every point of B appears verbatim in A.
    ///
    /// Set membership on exact coordinates: duplicates in A collapse and order
    /// is irrelevant. O(|A| + |B|). Vacuously true for an empty B.
    pub fn exact_match(&self) -> bool {
        let keys = self.reference.key_set();
        let matched = self.pattern.iter().all(|p| keys.contains(&p.key()));
        debug!(
            "exact_match: {} ({} distinct reference points)",
            matched,
            keys.len()
        );
        matched
    }

    /// Every point of B has some point of A within distance `eps` (inclusive).
    ///
    /// False when A is empty and B is not; true when B is empty.
    pub fn fuzzy_match(&self) -> bool {
        let search = self.neighbor_search();
        let matched = self.pattern.iter().all(|b| {
            let hit = search.any_within(*b, self.eps);
            trace!("fuzzy_match: ({}, {}) -> {}", b.x, b.y, hit);
            hit
        });
        debug!("fuzzy_match: {} (eps={})", matched, self.eps);
        matched
    }

    /// Nearest reference point for every pattern point within `eps`.
    ///
    /// Pairs follow B's order. Ties pick the first point of A. Pattern points
    /// without a reference point in range are skipped.
    pub fn matched_pairs(&self) -> Vec<MatchedPair> {
        let search = self.neighbor_search();
        let pairs: Vec<MatchedPair> = self
            .pattern
            .iter()
            .enumerate()
            .filter_map(|(pattern_index, b)| {
                let neighbor = search.nearest_within(*b, self.eps);
                trace!(
                    "nearest for B[{}] ({}, {}): {:?}",
                    pattern_index, b.x, b.y, neighbor
                );
                neighbor.map(|n| MatchedPair {
                    pattern_index,
                    reference_index: n.index,
                    pattern: *b,
                    reference: n.point,
                    distance: n.distance,
                })
            })
            .collect();
        debug!("matched_pairs: {}/{}", pairs.len(), self.pattern.len());
        pairs
    }

    /// Draw both sets and, optionally, the match connections onto `canvas`.
    ///
    /// See [`render::draw_match`] for the drawing rules.
    pub fn plot<C: Canvas + ?Sized>(&self, canvas: &mut C, show_connections: bool) {
        render::draw_match(self, canvas, show_connections);
    }

    fn neighbor_search(&self) -> Box<dyn NeighborSearch + '_> {
        let points = self.reference.points();
        if points.is_empty() {
            // Nothing to index
            return Box::new(LinearSearch::new(points));
        }
        if self.search.uses_index(points.len()) {
            Box::new(SpatialIndex::new(points))
        } else {
            Box::new(LinearSearch::new(points))
        }
    }
}
