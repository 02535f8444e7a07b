//! Error types for test-tensors
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for tensor fixture operations
#[derive(Error, Debug)]
pub enum TensorError {
    /// Shape failed validation (wrong arity or non-positive dimension)
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Volume rejected by a view function
    #[error("Invalid volume: {0}")]
    InvalidVolume(String),
}

/// Result type alias for tensor fixture operations
pub type TensorResult<T> = Result<T, TensorError>;
