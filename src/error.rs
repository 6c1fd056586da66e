//! Error types
//!
//! Only configuration loading can fail. The rules engine itself is total.

use std::path::PathBuf;

use figment::error::Kind;
use thiserror::Error;

/// Errors raised while loading or validating the base configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A required field is absent
    #[error("missing configuration field: {0}")]
    MissingField(String),

    /// A field is present but has the wrong type (e.g. non-numeric)
    #[error("invalid configuration field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A field parsed but its value is out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// Any other provider failure (malformed file, unreadable input)
    #[error("failed to read configuration: {0}")]
    Source(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        match &err.kind {
            Kind::MissingField(name) => ConfigError::MissingField(name.to_string()),
            Kind::InvalidType(actual, expected) => ConfigError::InvalidField {
                field: err.path.join("."),
                reason: format!("found {}, expected {}", actual, expected),
            },
            _ => ConfigError::Source(Box::new(err)),
        }
    }
}

/// Errors raised while parsing an interactive command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("expected 'on' or 'off', got: {0}")]
    InvalidSwitch(String),

    #[error("invalid hit count: {0}")]
    InvalidHitCount(String),

    #[error("unknown command: {0}")]
    Unknown(String),
}
