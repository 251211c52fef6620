//! Error types for the portfolio application.
//!
//! Only startup can fail: parsing and validating the embedded catalog and
//! reading the optional settings file. Everything the user does at runtime
//! (filtering, selecting, submitting) is infallible.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for portfolio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalog Errors ===
    /// The catalog JSON could not be parsed.
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),

    /// Two records of the same kind share an identity.
    #[error("duplicate {kind} id '{id}' in catalog")]
    DuplicateId {
        /// Record kind ("project" or "experience").
        kind: &'static str,
        /// The repeated identity.
        id: String,
    },

    /// A record is missing a field that must not be blank.
    #[error("{kind} '{id}' has an empty {field}")]
    EmptyField {
        /// Record kind ("project" or "experience").
        kind: &'static str,
        /// Identity of the offending record.
        id: String,
        /// Name of the blank field.
        field: &'static str,
    },

    /// A navigation link points somewhere the application cannot go.
    #[error("navigation link '{name}' has unknown target '{href}'")]
    UnknownRoute {
        /// Display name of the link.
        name: String,
        /// The unresolvable path.
        href: String,
    },

    // === Configuration Errors ===
    /// The settings file exists but could not be read.
    #[error("failed to read settings at {path}: {source}")]
    ConfigRead {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::config::Settings`].
    #[error("failed to parse settings at {path}: {source}")]
    ConfigParse {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Settings were parsed but hold an unusable value.
    #[error("invalid settings: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for portfolio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a settings validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = Error::DuplicateId {
            kind: "project",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate project id '7' in catalog");
    }

    #[test]
    fn test_config_validation_helper() {
        let err = Error::config_validation("featured_limit must be at least 1");
        assert!(matches!(err, Error::ConfigValidation { .. }));
        assert_eq!(
            err.to_string(),
            "invalid settings: featured_limit must be at least 1"
        );
    }

    #[test]
    fn test_unknown_route_message() {
        let err = Error::UnknownRoute {
            name: "Blog".to_string(),
            href: "/blog".to_string(),
        };
        assert!(err.to_string().contains("/blog"));
    }
}
