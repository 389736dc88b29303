//! Text rendering of sequencing output.
//!
//! Produces the strings a terminal front end prints: the arrow-joined seek
//! sequence, a one-line movement summary, step and comparison tables, and
//! ASCII seek charts for one result or several overlaid.

mod chart;
mod table;

pub use chart::{marker, render_chart, render_comparison_chart, ChartOptions};
pub use table::{render_comparison_table, render_step_table};

use crate::metrics::average_movement;
use crate::models::{AlgorithmResult, Cylinder};

/// Joins a sequence with arrows: `53 → 65 → 67`.
pub fn sequence_string(sequence: &[Cylinder]) -> String {
    sequence
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// `Total Head Movement: 640 | Average: 80.00`.
///
/// The average falls back to `0` when there are no requests.
pub fn metrics_line(result: &AlgorithmResult, request_count: usize) -> String {
    format!(
        "Total Head Movement: {} | Average: {}",
        result.total_movement,
        format_average(result.total_movement, request_count)
    )
}

/// Average per request to two decimals, or `0` with no requests.
pub(crate) fn format_average(total_movement: u64, request_count: usize) -> String {
    if request_count == 0 {
        "0".to_string()
    } else {
        format!("{:.2}", average_movement(total_movement, request_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    #[test]
    fn test_sequence_string() {
        assert_eq!(sequence_string(&[50, 90, 100, 10]), "50 → 90 → 100 → 10");
        assert_eq!(sequence_string(&[7]), "7");
    }

    #[test]
    fn test_metrics_line() {
        let result = AlgorithmResult::from_sequence(Algorithm::Fcfs, &[0, 10, 3]);
        assert_eq!(
            metrics_line(&result, 2),
            "Total Head Movement: 17 | Average: 8.50"
        );
    }

    #[test]
    fn test_metrics_line_empty() {
        let result = AlgorithmResult::idle(Algorithm::Fcfs, 5);
        assert_eq!(
            metrics_line(&result, 0),
            "Total Head Movement: 0 | Average: 0"
        );
    }
}
