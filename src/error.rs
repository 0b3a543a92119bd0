//! Error types for the cost and throughput engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions in configuration loading, the entry store, and
//! the HTTP boundary.

use thiserror::Error;

/// The main error type for the cost and throughput engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use throughput_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tx.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tx.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A region configuration violated a policy invariant.
    #[error("Invalid configuration for region '{region}': {message}")]
    InvalidConfig {
        /// The region whose configuration is invalid.
        region: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// No configuration exists for the requested region code.
    #[error("Region not found: {region}")]
    RegionNotFound {
        /// The region code that was not found.
        region: String,
    },

    /// No worker exists with the requested id.
    #[error("Worker not found: {id}")]
    WorkerNotFound {
        /// The worker id that was not found.
        id: u32,
    },

    /// The worker is still referenced by recorded shifts.
    #[error("Worker {id} is referenced by recorded shifts and cannot be deleted")]
    WorkerReferenced {
        /// The id of the referenced worker.
        id: u32,
    },

    /// A worker record was invalid.
    #[error("Invalid worker field '{field}': {message}")]
    InvalidWorker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift contained invalid data.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A write to the entry store could not be completed.
    ///
    /// The previous state of the entry is left intact when this is returned.
    #[error("Save failed: {message}")]
    SaveFailed {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
