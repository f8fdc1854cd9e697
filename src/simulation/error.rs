//! Error types for trajectory construction.

use thiserror::Error;

/// Errors raised while building trajectories.
#[derive(Debug, Error)]
pub enum SimError {
    /// CPT conversion needs |q / q0| <= 1 for the arccos; anything outside
    /// has no angle coordinate. The whole batch fails rather than silently
    /// skipping one trajectory.
    #[error("Initial condition q = {q} is outside the CPT domain |q| <= |q0| = {q0}")]
    InvalidInitialCondition {
        /// The offending initial position.
        q: f64,
        /// The reference amplitude it was compared against.
        q0: f64,
    },
}

/// Result type for trajectory construction.
pub type SimResult<T> = std::result::Result<T, SimError>;
