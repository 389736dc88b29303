//! Fixed-width text tables.

use super::format_average;
use crate::metrics::Comparison;
use crate::models::AlgorithmResult;

/// Renders the per-step breakdown of a result.
///
/// Wrap steps carry a `(wrap)` annotation in the distance column.
///
/// ```text
/// Step |  From |    To |     Distance | Running Total
/// -----+-------+-------+--------------+--------------
///    1 |    50 |    90 |           40 |            40
/// ```
pub fn render_step_table(result: &AlgorithmResult, request_count: usize) -> String {
    let mut lines = vec![
        format!(
            "{:>4} | {:>5} | {:>5} | {:>12} | {:>13}",
            "Step", "From", "To", "Distance", "Running Total"
        ),
        separator(&[4, 5, 5, 12, 13]),
    ];
    for (i, step) in result.steps.iter().enumerate() {
        let distance = if step.is_wrap {
            format!("{} (wrap)", step.distance)
        } else {
            step.distance.to_string()
        };
        lines.push(format!(
            "{:>4} | {:>5} | {:>5} | {:>12} | {:>13}",
            i + 1,
            step.from,
            step.to,
            distance,
            step.running_total
        ));
    }

    lines.push(String::new());
    lines.push(format!("{} Results:", result.algorithm.name()));
    lines.push(format!("Total head movement: {}", result.total_movement));
    lines.push(format!(
        "Average per request: {}",
        format_average(result.total_movement, request_count)
    ));
    lines.join("\n")
}

/// Renders a comparison table against FCFS.
///
/// Improvement is shown as a percentage, or `-` when undefined.
pub fn render_comparison_table(comparison: &Comparison) -> String {
    let mut lines = vec![
        format!(
            "{:<9} | {:>8} | {:>9} | {:>11}",
            "Algorithm", "Total", "Average", "Improvement"
        ),
        separator(&[9, 8, 9, 11]),
    ];
    for row in &comparison.rows {
        let improvement = match row.improvement_over_fcfs {
            Some(pct) => format!("{pct:.2}%"),
            None => "-".to_string(),
        };
        lines.push(format!(
            "{:<9} | {:>8} | {:>9.2} | {:>11}",
            row.algorithm.name(),
            row.total_movement,
            row.average_movement,
            improvement
        ));
    }
    lines.join("\n")
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("-+-")
}
