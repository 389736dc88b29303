//! Seek performance metrics.
//!
//! # KPI
//!
//! `SeekKpi` summarises a single [`crate::models::AlgorithmResult`]:
//! total movement, average movement per request, step and wrap counts.
//!
//! # Comparison
//!
//! `Comparison` lines several results up against FCFS, reporting the
//! percentage of head movement saved relative to arrival-order service.

mod comparison;
mod kpi;

pub use comparison::{Comparison, ComparisonRow};
pub use kpi::SeekKpi;

/// Average movement per request, `0.0` when there are no requests.
#[inline]
pub fn average_movement(total_movement: u64, request_count: usize) -> f64 {
    if request_count == 0 {
        0.0
    } else {
        total_movement as f64 / request_count as f64
    }
}
