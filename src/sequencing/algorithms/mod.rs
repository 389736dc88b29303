//! Built-in seek algorithms.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep to boundary**: SCAN, C-SCAN
//! - **Sweep to extreme request**: LOOK, C-LOOK
//!
//! All sweeping algorithms start moving toward higher cylinders; a request
//! at exactly the head position belongs to the upward sweep.

use super::SeekAlgorithm;
use crate::models::{Algorithm, AlgorithmResult, SeekRequest, Trace};

// ======================== Arrival order ========================

/// First-Come, First-Served.
///
/// Visits requests exactly in arrival order. This is the baseline the
/// other algorithms are compared against.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekAlgorithm for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        let mut trace = Trace::start(Algorithm::Fcfs, request.head);
        for &cylinder in &request.requests {
            trace.visit(cylinder);
        }
        trace.finish()
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly services the pending request closest to the current head
/// position.
///
/// # Tie-breaking
/// A linear scan keeps the first minimum found, so among requests at equal
/// distance the one earliest in the remaining list wins. Removal preserves
/// the relative order of the others.
///
/// # Complexity
/// O(n²) over the request count.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekAlgorithm for Sstf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sstf
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        let mut remaining = request.requests.clone();
        let mut trace = Trace::start(Algorithm::Sstf, request.head);

        while !remaining.is_empty() {
            let current = trace.position();
            let mut nearest = 0;
            let mut min_distance = remaining[0].abs_diff(current);
            for (i, &cylinder) in remaining.iter().enumerate().skip(1) {
                let distance = cylinder.abs_diff(current);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = i;
                }
            }
            trace.visit(remaining.remove(nearest));
        }

        trace.finish()
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Sweep to boundary ========================

/// Elevator algorithm.
///
/// Sweeps up through every request `>= head`, always continues to
/// `max_cylinder`, then reverses and services the rest in descending order.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SeekAlgorithm for Scan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Scan
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        if request.is_empty() {
            return AlgorithmResult::idle(Algorithm::Scan, request.head);
        }
        let (left, right) = request.partition_sorted();
        let mut trace = Trace::start(Algorithm::Scan, request.head);

        for cylinder in right {
            trace.visit(cylinder);
        }
        trace.visit_boundary(request.max_cylinder);
        for cylinder in left.into_iter().rev() {
            trace.visit(cylinder);
        }

        trace.finish()
    }

    fn description(&self) -> &'static str {
        "SCAN (elevator)"
    }
}

/// Circular SCAN.
///
/// Sweeps up through every request `>= head`, continues to `max_cylinder`
/// unless already there, jumps to cylinder 0, then sweeps up through the
/// remaining requests.
///
/// The jump is recorded as a wrap step whose distance equals the position
/// it leaves from. It is always taken, even when there is nothing left to
/// service below the head.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SeekAlgorithm for CScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Cscan
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        if request.is_empty() {
            return AlgorithmResult::idle(Algorithm::Cscan, request.head);
        }
        let (left, right) = request.partition_sorted();
        let mut trace = Trace::start(Algorithm::Cscan, request.head);

        for cylinder in right {
            trace.visit(cylinder);
        }
        if trace.position() < request.max_cylinder {
            trace.visit_boundary(request.max_cylinder);
        }
        trace.wrap();
        for cylinder in left {
            trace.visit(cylinder);
        }

        trace.finish()
    }

    fn description(&self) -> &'static str {
        "Circular SCAN"
    }
}

// ======================== Sweep to extreme request ========================

/// LOOK.
///
/// Like SCAN, but reverses at the highest request instead of the disk edge.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekAlgorithm for Look {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Look
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        let (left, right) = request.partition_sorted();
        let mut trace = Trace::start(Algorithm::Look, request.head);

        for cylinder in right.into_iter().chain(left.into_iter().rev()) {
            trace.visit(cylinder);
        }

        trace.finish()
    }
}

/// Circular LOOK.
///
/// Like C-SCAN, but jumps straight from the highest request to the lowest
/// pending one. The jump is an ordinary step: no boundary waypoints and no
/// wrap flag are recorded.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekAlgorithm for CLook {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Clook
    }

    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult {
        let (left, right) = request.partition_sorted();
        let mut trace = Trace::start(Algorithm::Clook, request.head);

        for cylinder in right.into_iter().chain(left) {
            trace.visit(cylinder);
        }

        trace.finish()
    }

    fn description(&self) -> &'static str {
        "Circular LOOK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> SeekRequest {
        SeekRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53).with_max_cylinder(199)
    }

    fn small() -> SeekRequest {
        SeekRequest::new(vec![10, 90], 50).with_max_cylinder(100)
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_fcfs_textbook_total() {
        let result = Fcfs.sequence(&textbook());
        assert_eq!(result.sequence, vec![53, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(result.total_movement, 640);
        let distances: Vec<u64> = result.steps.iter().map(|s| s.distance).collect();
        assert_eq!(distances, vec![45, 85, 146, 85, 108, 110, 59, 2]);
        assert_eq!(result.steps.last().unwrap().running_total, 640);
    }

    #[test]
    fn test_sstf_picks_nearest_first() {
        let result = Sstf.sequence(&textbook());
        assert_eq!(result.sequence[1], 65);
        assert_eq!(result.sequence, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
        assert_eq!(result.total_movement, 236);
    }

    #[test]
    fn test_sstf_tie_goes_to_earliest_remaining() {
        // 40 and 60 are both 10 away from 50; 60 arrived first.
        let request = SeekRequest::new(vec![60, 40], 50).with_max_cylinder(100);
        let result = Sstf.sequence(&request);
        assert_eq!(result.sequence, vec![50, 60, 40]);

        let request = SeekRequest::new(vec![40, 60], 50).with_max_cylinder(100);
        let result = Sstf.sequence(&request);
        assert_eq!(result.sequence, vec![50, 40, 60]);
    }

    #[test]
    fn test_sstf_duplicates() {
        let request = SeekRequest::new(vec![20, 20, 5], 20).with_max_cylinder(50);
        let result = Sstf.sequence(&request);
        assert_eq!(result.sequence, vec![20, 20, 20, 5]);
        assert_eq!(result.total_movement, 15);
    }

    #[test]
    fn test_scan_small() {
        let result = Scan.sequence(&small());
        assert_eq!(result.sequence, vec![50, 90, 100, 10]);
        assert_eq!(result.total_movement, 140);
        assert_eq!(result.serviced(), vec![90, 10]);
        assert!(result.wrap_step().is_none());
    }

    #[test]
    fn test_scan_visits_boundary_without_right_requests() {
        let request = SeekRequest::new(vec![10, 30], 50).with_max_cylinder(100);
        let result = Scan.sequence(&request);
        assert_eq!(result.sequence, vec![50, 100, 30, 10]);
        assert_eq!(result.total_movement, 50 + 70 + 20);
    }

    #[test]
    fn test_scan_request_at_boundary_keeps_waypoint() {
        let request = SeekRequest::new(vec![100, 10], 50).with_max_cylinder(100);
        let result = Scan.sequence(&request);
        assert_eq!(result.sequence, vec![50, 100, 100, 10]);
        assert_eq!(result.serviced(), vec![100, 10]);
        assert_eq!(result.total_movement, 140);
    }

    #[test]
    fn test_cscan_small() {
        let result = CScan.sequence(&small());
        assert_eq!(result.sequence, vec![50, 90, 100, 0, 10]);
        assert_eq!(result.total_movement, 160);

        let wraps: Vec<_> = result.steps.iter().filter(|s| s.is_wrap).collect();
        assert_eq!(wraps.len(), 1);
        assert_eq!((wraps[0].from, wraps[0].to, wraps[0].distance), (100, 0, 100));
    }

    #[test]
    fn test_cscan_skips_boundary_step_when_at_max() {
        let request = SeekRequest::new(vec![100, 10], 50).with_max_cylinder(100);
        let result = CScan.sequence(&request);
        assert_eq!(result.sequence, vec![50, 100, 0, 10]);
        assert_eq!(result.total_movement, 50 + 100 + 10);
    }

    #[test]
    fn test_cscan_wraps_even_with_nothing_below() {
        let request = SeekRequest::new(vec![5, 20], 0).with_max_cylinder(30);
        let result = CScan.sequence(&request);
        assert_eq!(result.sequence, vec![0, 5, 20, 30, 0]);
        assert_eq!(result.total_movement, 60);
        assert_eq!(result.wrap_step().unwrap().distance, 30);
    }

    #[test]
    fn test_look_textbook() {
        let result = Look.sequence(&textbook());
        assert_eq!(result.sequence, vec![53, 65, 67, 98, 122, 124, 183, 37, 14]);
        assert_eq!(result.total_movement, 130 + 146 + 23);
        assert!(result.steps.iter().all(|s| !s.is_boundary));
    }

    #[test]
    fn test_clook_textbook() {
        let result = CLook.sequence(&textbook());
        assert_eq!(result.sequence, vec![53, 65, 67, 98, 122, 124, 183, 14, 37]);
        assert_eq!(result.total_movement, 130 + 169 + 23);
        assert!(result.wrap_step().is_none());
    }

    #[test]
    fn test_empty_requests_are_idle() {
        let request = SeekRequest::new(Vec::new(), 42).with_max_cylinder(100);
        let all: [&dyn SeekAlgorithm; 6] = [&Fcfs, &Sstf, &Scan, &CScan, &Look, &CLook];
        for alg in all {
            let result = alg.sequence(&request);
            assert_eq!(result.sequence, vec![42], "{}", alg.name());
            assert!(result.steps.is_empty(), "{}", alg.name());
            assert_eq!(result.total_movement, 0, "{}", alg.name());
        }
    }

    #[test]
    fn test_every_request_serviced_once() {
        let request = textbook();
        let all: [&dyn SeekAlgorithm; 6] = [&Fcfs, &Sstf, &Scan, &CScan, &Look, &CLook];
        for alg in all {
            let result = alg.sequence(&request);
            assert_eq!(result.head(), Some(request.head));
            assert_eq!(
                sorted(result.serviced()),
                sorted(request.requests.clone()),
                "{}",
                alg.name()
            );
            let summed: u64 = result
                .sequence
                .windows(2)
                .map(|w| u64::from(w[0].abs_diff(w[1])))
                .sum();
            assert_eq!(result.total_movement, summed, "{}", alg.name());
        }
    }

    #[test]
    fn test_caller_requests_untouched() {
        let request = textbook();
        let before = request.requests.clone();
        let _ = Sstf.sequence(&request);
        let _ = CScan.sequence(&request);
        assert_eq!(request.requests, before);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Sstf.description(), "Shortest Seek Time First");
        assert_eq!(Look.description(), "LOOK");
        assert_eq!(CScan.name(), "C-SCAN");
    }
}
