//! Configuration loading for bindu-match.
//!
//! All settings load from a single YAML file with sensible defaults.
//!
//! ```rust,ignore
//! use bindu_match::config::BinduConfig;
//!
//! // Load from configs/bindu.yaml, or defaults when the file is absent
//! let config = BinduConfig::load_default()?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! matcher:
//!   eps: 0.1          # 0 selects exact matching
//!   search: auto      # linear | spatial_index | auto
//!
//! render:
//!   width: 600        # plot area in pixels
//!   show_grid: true
//! ```
//!
//! [`MatchScenario`] bundles two point sets with a matcher section, for
//! reproducible diagnostics.

mod bindu;
mod matcher;
mod render;
mod scenario;

pub use bindu::{BinduConfig, DEFAULT_CONFIG_PATH};
pub use matcher::{AUTO_INDEX_THRESHOLD, MatcherConfig, SearchStrategy};
pub use render::RenderConfig;
pub use scenario::MatchScenario;

pub(crate) use matcher::validate_eps;
