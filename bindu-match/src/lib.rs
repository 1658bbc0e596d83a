//! # Bindu-Match: 2D Point Set Matching
//!
//! Checks whether a pattern point set B can be found inside a reference point
//! set A, and renders a diagnostic figure of the match.
//!
//! ## Matching Modes
//!
//! - **Exact** (`eps == 0`): every point of B must appear verbatim in A.
//! - **Fuzzy** (`eps > 0`): every point of B must have a point of A within
//!   Euclidean distance `eps` (inclusive).
//!
//! ## Quick Start
//!
//! ```rust
//! use bindu_match::PointMatcher;
//! use bindu_match::render::RecordingCanvas;
//!
//! let matcher = PointMatcher::new(
//!     [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
//!     [(1.0, 1.0), (2.0, 2.0)],
//!     0.0,
//! )?;
//! assert!(matcher.exact_match());
//!
//! let mut canvas = RecordingCanvas::new();
//! matcher.plot(&mut canvas, true);
//! assert_eq!(canvas.title(), Some("Point Matching Visualization (eps=0.0)"));
//! # Ok::<(), bindu_match::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (Point2D, PointSet, Bounds)
//! - [`config`]: YAML configuration and match scenarios
//! - [`matching`]: PointMatcher and neighbor search (linear, R-tree)
//! - [`render`]: Canvas trait, SVG output, recording canvas
//! - [`error`]: Error type
//!
//! ## Coordinate Frame
//!
//! Standard math convention: X to the right, Y up. The SVG renderer flips Y.

pub mod config;
pub mod core;
pub mod error;
pub mod matching;
pub mod render;

// Re-export main types at crate root
pub use config::{BinduConfig, MatchScenario, MatcherConfig, SearchStrategy};
pub use crate::core::{Point2D, PointSet};
pub use error::{Error, Result};
pub use matching::{MatchMode, MatchedPair, PointMatcher};
