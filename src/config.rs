// src/config.rs
//! Tunable knobs for the rank computation.

use crate::error::{RankError, Result};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 0.005;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Parameters for the PageRank engine.
#[derive(Debug, Clone)]
pub struct RankParams {
    /// Probability of following an outgoing link rather than jumping to a
    /// random page. Must lie in (0, 1).
    pub damping: f64,
    /// Relative change in total rank mass below which iteration stops.
    pub tolerance: f64,
    /// Hard ceiling on the number of iterations.
    pub max_iterations: usize,
}

impl RankParams {
    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any knob is out of range. Rejection
    /// happens before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidParameter(format!(
                "damping must lie in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.tolerance > 0.0) {
            return Err(RankError::InvalidParameter(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidParameter(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
