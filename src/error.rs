//! Error types for the staffing rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The rule functions themselves are total over their input domain; errors
//! only arise at the configuration-loading and API boundaries.

use thiserror::Error;

/// The main error type for the staffing rules engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_rules::error::RulesError;
///
/// let error = RulesError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RulesError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Staff role code was not found in the configuration.
    #[error("Role not found: {code}")]
    RoleNotFound {
        /// The role code that was not found.
        code: String,
    },

    /// The shift policy configuration contained an unusable value.
    #[error("Invalid shift policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },
}

/// A type alias for Results that return RulesError.
pub type RulesResult<T> = Result<T, RulesError>;
