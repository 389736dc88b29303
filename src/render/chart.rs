//! ASCII seek charts.
//!
//! The horizontal axis is the cylinder position scaled to the chart width
//! by `max_cylinder`; each row below is one step of the seek sequence.
//! In a single-result chart ordinary movements are drawn with `-` and the
//! C-SCAN wrap with `~`. The comparison chart overlays several results on
//! one grid, one marker letter per algorithm.

use crate::models::{Algorithm, AlgorithmResult, Cylinder};

const GUTTER: usize = 6;

/// Chart dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Columns used for the cylinder axis.
    pub width: usize,
    /// Number of labelled intervals on the cylinder axis.
    pub ticks: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 61,
            ticks: 10,
        }
    }
}

/// Cylinder-to-column scaling shared by both charts.
#[derive(Debug, Clone, Copy)]
struct Axis {
    width: usize,
    max_cylinder: Cylinder,
    ticks: usize,
}

impl Axis {
    fn new(max_cylinder: Cylinder, options: &ChartOptions) -> Self {
        Self {
            width: options.width.max(2),
            max_cylinder,
            ticks: options.ticks.max(1),
        }
    }

    fn column(&self, cylinder: Cylinder) -> usize {
        if self.max_cylinder == 0 {
            return 0;
        }
        let max = u64::from(self.max_cylinder);
        let scaled = (u64::from(cylinder) * (self.width as u64 - 1) + max / 2) / max;
        (scaled as usize).min(self.width - 1)
    }

    fn row(&self, index: usize, cells: Vec<char>, label: &str) -> String {
        format!("{index:>4} |{}| {label}", cells.into_iter().collect::<String>())
    }

    /// Axis line, tick labels and caption.
    fn footer(&self, caption: &str) -> Vec<String> {
        vec![
            format!("{}+{}+", " ".repeat(GUTTER - 1), "-".repeat(self.width)),
            self.tick_labels(),
            format!("{}Cylinder Position →   ({caption})", " ".repeat(GUTTER)),
        ]
    }

    fn tick_labels(&self) -> String {
        let mut buffer = vec![' '; GUTTER + self.width + 8];
        let mut next_free = 0;

        for i in 0..=self.ticks {
            let label = ((i as f64 / self.ticks as f64) * f64::from(self.max_cylinder)).round()
                as Cylinder;
            let text = label.to_string();
            let start = (GUTTER + self.column(label)).saturating_sub(text.len() / 2);
            if start < next_free || start + text.len() > buffer.len() {
                continue;
            }
            for (offset, ch) in text.chars().enumerate() {
                buffer[start + offset] = ch;
            }
            next_free = start + text.len() + 1;
        }

        buffer.into_iter().collect::<String>().trim_end().to_string()
    }
}

/// Marker letter for an algorithm in the comparison chart.
pub fn marker(algorithm: Algorithm) -> char {
    match algorithm {
        Algorithm::Fcfs => 'F',
        Algorithm::Sstf => 'S',
        Algorithm::Scan => 'N',
        Algorithm::Cscan => 'C',
        Algorithm::Look => 'L',
        Algorithm::Clook => 'K',
    }
}

/// Renders the seek path of a result.
pub fn render_chart(
    result: &AlgorithmResult,
    max_cylinder: Cylinder,
    options: &ChartOptions,
) -> String {
    let axis = Axis::new(max_cylinder, options);
    let mut lines = Vec::with_capacity(result.sequence.len() + 4);
    let mut previous: Option<usize> = None;

    for (i, &cylinder) in result.sequence.iter().enumerate() {
        let mut cells = vec![' '; axis.width];
        let here = axis.column(cylinder);
        if let Some(prev) = previous {
            let fill = if result.steps.get(i - 1).is_some_and(|s| s.is_wrap) {
                '~'
            } else {
                '-'
            };
            let (lo, hi) = if prev <= here { (prev, here) } else { (here, prev) };
            cells[lo..=hi].fill(fill);
        }
        cells[here] = if i == 0 { '*' } else { 'o' };
        previous = Some(here);

        lines.push(axis.row(i, cells, &cylinder.to_string()));
    }

    lines.extend(axis.footer("rows: step, * start, o visit"));
    if result.wrap_step().is_some() {
        lines.push(format!("{}~ wrap to cylinder 0", " ".repeat(GUTTER)));
    }

    lines.join("\n")
}

/// Overlays several results on one grid.
///
/// Row `i` shows where each algorithm's head is after step `i`. Markers
/// come from [`marker`]; cells shared by more than one algorithm show `#`,
/// and the row holding a C-SCAN wrap is drawn with `~` from cylinder 0 to
/// the wrap origin. A legend with each algorithm's total follows the axis.
pub fn render_comparison_chart(
    results: &[AlgorithmResult],
    max_cylinder: Cylinder,
    options: &ChartOptions,
) -> String {
    let axis = Axis::new(max_cylinder, options);
    let rows = results.iter().map(|r| r.sequence.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(rows + 4 + results.len());

    for i in 0..rows {
        let mut cells = vec![' '; axis.width];
        for result in results {
            if let Some(wrap) = result.steps.get(i.wrapping_sub(1)).filter(|s| s.is_wrap) {
                let origin = axis.column(wrap.from);
                for cell in &mut cells[..=origin] {
                    if *cell == ' ' {
                        *cell = '~';
                    }
                }
            }
        }
        let mut occupied = vec![false; axis.width];
        for result in results {
            let Some(&cylinder) = result.sequence.get(i) else {
                continue;
            };
            let here = axis.column(cylinder);
            cells[here] = if occupied[here] {
                '#'
            } else {
                marker(result.algorithm)
            };
            occupied[here] = true;
        }
        lines.push(axis.row(i, cells, ""));
    }

    lines.extend(axis.footer("rows: step, # shared position"));
    for result in results {
        lines.push(format!(
            "{}{} = {} (total {}){}",
            " ".repeat(GUTTER),
            marker(result.algorithm),
            result.algorithm.name(),
            result.total_movement,
            if result.wrap_step().is_some() {
                ", ~ wrap"
            } else {
                ""
            }
        ));
    }

    lines
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeekRequest;
    use crate::sequencing::SequencingEngine;

    fn small() -> SeekRequest {
        SeekRequest::new(vec![10, 90], 50).with_max_cylinder(100)
    }

    fn chart(algorithm: Algorithm) -> String {
        let request = small();
        let result = SequencingEngine::new().run(algorithm, &request);
        render_chart(&result, request.max_cylinder, &ChartOptions::default())
    }

    fn axis_cells(line: &str) -> &str {
        &line[GUTTER..GUTTER + ChartOptions::default().width]
    }

    #[test]
    fn test_one_row_per_visit() {
        let text = chart(Algorithm::Scan);
        let rows: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains('*'));
        assert!(rows[0].ends_with("| 50"));
        assert!(rows[2].ends_with("| 100"));
    }

    #[test]
    fn test_start_marker_column() {
        let text = chart(Algorithm::Fcfs);
        let first = text.lines().next().unwrap();
        // 50 of 100 on a 61-wide axis lands on column 30.
        assert_eq!(axis_cells(first).find('*'), Some(30));
    }

    #[test]
    fn test_wrap_drawn_only_for_cscan() {
        let cscan = chart(Algorithm::Cscan);
        assert!(cscan.contains('~'));
        assert!(cscan.contains("wrap to cylinder 0"));
        assert!(!chart(Algorithm::Scan).contains('~'));
    }

    #[test]
    fn test_tick_labels() {
        let text = chart(Algorithm::Look);
        let lines: Vec<&str> = text.lines().collect();
        let axis = lines
            .iter()
            .position(|l| l.trim_start().starts_with('+'))
            .unwrap();
        let labels = lines[axis + 1];
        assert!(labels.trim_start().starts_with('0'));
        assert!(labels.contains("50"));
        assert!(labels.trim_end().ends_with("100"));
    }

    #[test]
    fn test_idle_and_zero_width_disk() {
        let result = AlgorithmResult::idle(Algorithm::Fcfs, 0);
        let text = render_chart(&result, 0, &ChartOptions::default());
        assert!(text.lines().next().unwrap().contains('*'));
    }

    #[test]
    fn test_comparison_chart_overlays_all_results() {
        let request = small();
        let results = SequencingEngine::new().run_all(&request);
        let text =
            render_comparison_chart(&results, request.max_cylinder, &ChartOptions::default());
        let rows: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();

        // C-SCAN has the longest sequence: [50, 90, 100, 0, 10].
        assert_eq!(rows.len(), 5);
        // Every head starts at 50.
        assert_eq!(axis_cells(rows[0]).find('#'), Some(30));
        assert_eq!(axis_cells(rows[0]).trim(), "#");
        // Only C-SCAN still moves on the last row.
        assert_eq!(axis_cells(rows[4]).trim(), "C");

        for alg in Algorithm::ALL {
            assert!(text.contains(&format!("{} = {} ", marker(alg), alg.name())));
        }
        assert!(text.contains("C = C-SCAN (total 160), ~ wrap"));
        assert!(text.contains("N = SCAN (total 140)\n"));
    }

    #[test]
    fn test_comparison_chart_marks_wrap_row() {
        let request = small();
        let results = SequencingEngine::new()
            .run_selected(&[Algorithm::Fcfs, Algorithm::Cscan], &request);
        let text =
            render_comparison_chart(&results, request.max_cylinder, &ChartOptions::default());
        let rows: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();

        // Step 3 of C-SCAN is the 100 -> 0 wrap.
        let wrap_row = axis_cells(rows[3]);
        assert!(wrap_row.starts_with('C'));
        assert!(wrap_row[1..].chars().all(|c| c == '~'));
        assert!(!axis_cells(rows[2]).contains('~'));
    }

    #[test]
    fn test_comparison_chart_empty() {
        let text = render_comparison_chart(&[], 100, &ChartOptions::default());
        assert!(!text.contains('|'));
        assert!(text.contains("Cylinder Position"));
    }
}
