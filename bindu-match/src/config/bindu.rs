//! Top-level BinduConfig loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::matcher::MatcherConfig;
use super::render::RenderConfig;
use crate::error::Result;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/bindu.yaml";

/// Full bindu-match configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BinduConfig {
    /// Matcher settings
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// SVG rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl BinduConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from [`DEFAULT_CONFIG_PATH`], or defaults if the file is absent
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(DEFAULT_CONFIG_PATH)
    }

    /// Load from `path`, or defaults if the file is absent.
    ///
    /// A file that exists but fails to read or parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: BinduConfig = serde_yaml::from_str(yaml)?;
        config.matcher.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
