//! Error types for bindu-match

use thiserror::Error;

/// bindu-match error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed point, wrong coordinate arity, or bad tolerance.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// YAML configuration or scenario could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a config file or writing a rendered figure failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("eps must be non-negative".to_string());
        assert_eq!(err.to_string(), "Invalid input: eps must be non-negative");
    }

    #[test]
    fn test_yaml_error_maps_to_config() {
        let parse: std::result::Result<Vec<f64>, _> = serde_yaml::from_str("[1.0, 2.0");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
