//! Error Types
//!
//! This module defines the error types used throughout the recorder.
//!
//! # Overview
//!
//! The main error type [`RecorderError`] covers all failure modes including:
//! - Recording session state machine violations
//! - Path resolution against the recorded hierarchy
//! - Asset persistence failures reported by an [`AssetSink`](crate::assets::AssetSink)
//! - Configuration loading errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, RecorderError>`.
//!
//! ```rust,ignore
//! use myth_recorder::errors::{RecorderError, Result};
//!
//! fn record() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::recorder::SessionState;

/// The main error type for the recorder.
#[derive(Error, Debug)]
pub enum RecorderError {
    // ========================================================================
    // Session Errors
    // ========================================================================
    /// An operation was requested while the session was in a state that
    /// does not allow it (e.g. `start` while already recording).
    #[error("Cannot {operation} while session is {state:?}")]
    InvalidStateTransition {
        /// The rejected operation
        operation: &'static str,
        /// The state the session was in when the call was made
        state: SessionState,
    },

    /// An operation needs recorders, but `setup` has not been called yet.
    #[error("Cannot {0} before the session is set up")]
    SessionNotSetUp(&'static str),

    // ========================================================================
    // Hierarchy Errors
    // ========================================================================
    /// The target node is not a descendant of the recording root.
    #[error("Node '{target}' is not under recording root '{root}'")]
    UnresolvedPath {
        /// Name of the node whose path was requested
        target: String,
        /// Name of the recording root
        root: String,
    },

    /// A node handle does not exist in the node tree.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// The asset sink failed to persist an exported clip.
    #[error("Failed to persist animation asset: {0}")]
    AssetPersistence(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, RecorderError>`.
pub type Result<T> = std::result::Result<T, RecorderError>;
