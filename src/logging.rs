//! Logging setup.
//!
//! State transitions (navigation, filters, overlay, contact submission) are
//! reported through `tracing`; this module installs the subscriber.

use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the application logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Convert verbosity to a tracing level.
    #[must_use]
    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Directives used when `RUST_LOG` is unset.
///
/// The window, renderer and runtime crates stay at `warn`; only the
/// application's own events follow `verbosity`.
fn default_directives(verbosity: Verbosity) -> String {
    format!("warn,portfolio={}", verbosity.to_level())
}

/// Install the global subscriber for the application.
///
/// A `RUST_LOG` value replaces the directives built from `verbosity`.
/// Only the first call installs anything.
pub fn init_logging(verbosity: Verbosity) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directives(verbosity)),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init();
}

/// Route warnings to the test writer so failing tests show them.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn test_default_directives_scope_verbosity_to_app() {
        assert_eq!(default_directives(Verbosity::Normal), "warn,portfolio=INFO");
        assert_eq!(default_directives(Verbosity::Quiet), "warn,portfolio=ERROR");
    }

    #[test]
    fn test_verbosity_deserializes_lowercase() {
        let v: Verbosity = serde_json::from_str("\"verbose\"").unwrap();
        assert_eq!(v, Verbosity::Verbose);
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
        init_test_logging();
    }
}
