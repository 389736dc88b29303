//! Cross-algorithm comparison against the FCFS baseline.

use serde::{Deserialize, Serialize};

use super::average_movement;
use crate::models::{Algorithm, AlgorithmResult};

/// One line of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Total head movement.
    pub total_movement: u64,
    /// Average movement per request.
    pub average_movement: f64,
    /// Percent of FCFS movement saved. `None` for FCFS itself, when no FCFS
    /// result is present, or when FCFS moved zero cylinders.
    pub improvement_over_fcfs: Option<f64>,
}

/// Side-by-side totals for several algorithms over the same request set.
///
/// # Example
/// ```
/// use u_seek::metrics::Comparison;
/// use u_seek::models::{Algorithm, SeekRequest};
/// use u_seek::sequencing::SequencingEngine;
///
/// let request = SeekRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
/// let results = SequencingEngine::new().run_all(&request);
/// let comparison = Comparison::from_results(&results, request.len());
///
/// assert_eq!(comparison.rows[0].improvement_over_fcfs, None);
/// assert_eq!(comparison.best(), Some(Algorithm::Sstf));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// FCFS total used as the baseline, if FCFS was run.
    pub fcfs_total: Option<u64>,
    /// Rows in input order.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Builds a comparison from results over the same request set.
    pub fn from_results(results: &[AlgorithmResult], request_count: usize) -> Self {
        let fcfs_total = results
            .iter()
            .find(|r| r.algorithm == Algorithm::Fcfs)
            .map(|r| r.total_movement);

        let rows = results
            .iter()
            .map(|r| ComparisonRow {
                algorithm: r.algorithm,
                total_movement: r.total_movement,
                average_movement: average_movement(r.total_movement, request_count),
                improvement_over_fcfs: improvement(r, fcfs_total),
            })
            .collect();

        Self { fcfs_total, rows }
    }

    /// Algorithm with the least total movement; the first wins on ties.
    pub fn best(&self) -> Option<Algorithm> {
        self.rows
            .iter()
            .reduce(|best, row| {
                if row.total_movement < best.total_movement {
                    row
                } else {
                    best
                }
            })
            .map(|row| row.algorithm)
    }

    /// Row for a given algorithm.
    pub fn row(&self, algorithm: Algorithm) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }
}

fn improvement(result: &AlgorithmResult, fcfs_total: Option<u64>) -> Option<f64> {
    if result.algorithm == Algorithm::Fcfs {
        return None;
    }
    match fcfs_total {
        Some(fcfs) if fcfs > 0 => {
            Some((fcfs as f64 - result.total_movement as f64) / fcfs as f64 * 100.0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeekRequest;
    use crate::sequencing::SequencingEngine;

    fn textbook() -> SeekRequest {
        SeekRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53).with_max_cylinder(199)
    }

    #[test]
    fn test_improvement_over_fcfs() {
        let request = textbook();
        let results = SequencingEngine::new().run_all(&request);
        let comparison = Comparison::from_results(&results, request.len());

        assert_eq!(comparison.fcfs_total, Some(640));
        let sstf = comparison.row(Algorithm::Sstf).unwrap();
        assert_eq!(sstf.total_movement, 236);
        // (640 - 236) / 640 = 63.125%
        assert!((sstf.improvement_over_fcfs.unwrap() - 63.125).abs() < 1e-10);
        assert!((sstf.average_movement - 29.5).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_row_has_no_improvement() {
        let request = textbook();
        let results = SequencingEngine::new().run_all(&request);
        let comparison = Comparison::from_results(&results, request.len());
        assert_eq!(
            comparison.row(Algorithm::Fcfs).unwrap().improvement_over_fcfs,
            None
        );
    }

    #[test]
    fn test_zero_fcfs_total() {
        // Every request sits at the head: FCFS moves nothing.
        let request = SeekRequest::new(vec![50, 50], 50).with_max_cylinder(100);
        let results = SequencingEngine::new().run_all(&request);
        let comparison = Comparison::from_results(&results, request.len());

        assert_eq!(comparison.fcfs_total, Some(0));
        assert!(comparison.rows.iter().all(|r| r.improvement_over_fcfs.is_none()));
    }

    #[test]
    fn test_without_fcfs() {
        let request = textbook();
        let results = SequencingEngine::new().run_selected(&[Algorithm::Scan], &request);
        let comparison = Comparison::from_results(&results, request.len());
        assert_eq!(comparison.fcfs_total, None);
        assert_eq!(comparison.rows[0].improvement_over_fcfs, None);
    }

    #[test]
    fn test_negative_improvement() {
        // Sorted arrival order: FCFS is already optimal, SCAN overshoots.
        let request = SeekRequest::new(vec![60, 70], 50).with_max_cylinder(199);
        let results = SequencingEngine::new()
            .run_selected(&[Algorithm::Fcfs, Algorithm::Scan], &request);
        let comparison = Comparison::from_results(&results, request.len());
        let scan = comparison.row(Algorithm::Scan).unwrap();
        assert!(scan.improvement_over_fcfs.unwrap() < 0.0);
    }

    #[test]
    fn test_best_first_wins_ties() {
        let request = SeekRequest::new(vec![60, 70], 50).with_max_cylinder(199);
        let results = SequencingEngine::new().run_all(&request);
        let comparison = Comparison::from_results(&results, request.len());
        // FCFS, SSTF, LOOK and C-LOOK all move 20; FCFS comes first.
        assert_eq!(comparison.best(), Some(Algorithm::Fcfs));
        assert_eq!(Comparison::from_results(&[], 0).best(), None);
    }
}
