//! Errors raised while loading configuration, persisting networks or building a world.

use thiserror::Error;

/// Errors from the fallible edges of the simulation.
///
/// Geometry, sensing and kinematics never fail; only configuration and
/// persistence do.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A file did not contain valid JSON for the expected type.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    /// Parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    /// A network does not fit the sensor/controls layout.
    #[error("network shape mismatch: expected {expected:?}, found {found:?}")]
    NetworkShape {
        /// Expected (inputs, outputs).
        expected: (usize, usize),
        /// Actual (inputs, outputs).
        found: (usize, usize),
    },
}
