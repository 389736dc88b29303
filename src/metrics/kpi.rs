//! Per-result seek indicators.

use serde::{Deserialize, Serialize};

use super::average_movement;
use crate::models::{Algorithm, AlgorithmResult};

/// Seek performance indicators for one algorithm run.
///
/// All distances are in cylinders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekKpi {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Sum of all head movements.
    pub total_movement: u64,
    /// `total_movement / request_count`, or `0.0` with no requests.
    pub average_movement: f64,
    /// Number of head movements, boundary waypoints included.
    pub step_count: usize,
    /// Number of C-SCAN wrap steps.
    pub wrap_count: usize,
    /// Largest single head movement.
    pub max_seek: u64,
}

impl SeekKpi {
    /// Computes indicators from a result.
    ///
    /// # Arguments
    /// * `result` - The sequencing output.
    /// * `request_count` - Number of requests in the input (not the number
    ///   of steps, which can include boundary waypoints).
    pub fn calculate(result: &AlgorithmResult, request_count: usize) -> Self {
        Self {
            algorithm: result.algorithm,
            total_movement: result.total_movement,
            average_movement: average_movement(result.total_movement, request_count),
            step_count: result.steps.len(),
            wrap_count: result.steps.iter().filter(|s| s.is_wrap).count(),
            max_seek: result.max_seek(),
        }
    }
}
