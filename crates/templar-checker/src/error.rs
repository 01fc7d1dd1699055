//! Checker errors
//!
//! These are faults of the checker's inputs or collaborators, never of the
//! code being checked. Problems in checked code are [`Diagnostic`]s.
//!
//! [`Diagnostic`]: crate::diagnostic::Diagnostic

use thiserror::Error;

/// Errors that abort a template check
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The resolver claims a class exists but cannot describe it
    #[error("Inconsistent symbol table: '{name}' exists but has no kind")]
    InconsistentSymbol {
        /// Class name that was looked up
        name: String,
    },

    /// A message template has the wrong number of placeholders
    #[error("Message template '{template}' expects {expected} placeholder(s), found {actual}")]
    MessageArity {
        /// The offending template
        template: String,
        /// Placeholders required
        expected: usize,
        /// Placeholders found
        actual: usize,
    },
}

/// Errors that can occur while loading checker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
