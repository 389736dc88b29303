//! Algorithm result (engine output) model.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Cylinder, MovementStep};

/// The outcome of running one algorithm over a [`super::SeekRequest`].
///
/// # Invariants
/// - `sequence[0]` is the starting head position.
/// - `steps[i]` moves from `sequence[i]` to `sequence[i + 1]`.
/// - `total_movement` is the sum of all step distances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Visited cylinders, starting with the head.
    pub sequence: Vec<Cylinder>,
    /// Per-movement breakdown.
    pub steps: Vec<MovementStep>,
    /// Total head movement in cylinders.
    pub total_movement: u64,
}

impl AlgorithmResult {
    /// A result that never leaves the head (no requests).
    pub fn idle(algorithm: Algorithm, head: Cylinder) -> Self {
        Self {
            algorithm,
            sequence: vec![head],
            steps: Vec::new(),
            total_movement: 0,
        }
    }

    /// Builds a result by walking a plain sequence of request visits.
    ///
    /// Every element after the first is treated as a serviced request.
    pub fn from_sequence(algorithm: Algorithm, sequence: &[Cylinder]) -> Self {
        let Some((&head, rest)) = sequence.split_first() else {
            return Self::idle(algorithm, 0);
        };
        let mut trace = Trace::start(algorithm, head);
        for &cylinder in rest {
            trace.visit(cylinder);
        }
        trace.finish()
    }

    /// Starting head position, `None` for an empty sequence.
    #[inline]
    pub fn head(&self) -> Option<Cylinder> {
        self.sequence.first().copied()
    }

    /// Position after the last step, `None` for an empty sequence.
    #[inline]
    pub fn final_position(&self) -> Option<Cylinder> {
        self.sequence.last().copied()
    }

    /// Serviced requests in visiting order, boundary waypoints excluded.
    pub fn serviced(&self) -> Vec<Cylinder> {
        self.steps
            .iter()
            .filter(|s| !s.is_boundary)
            .map(|s| s.to)
            .collect()
    }

    /// The C-SCAN wrap step, if any.
    pub fn wrap_step(&self) -> Option<&MovementStep> {
        self.steps.iter().find(|s| s.is_wrap)
    }

    /// Largest single movement.
    pub fn max_seek(&self) -> u64 {
        self.steps.iter().map(|s| s.distance).max().unwrap_or(0)
    }
}

/// Incremental builder that keeps `sequence`, `steps` and the running
/// total consistent while an algorithm walks the disk.
#[derive(Debug)]
pub(crate) struct Trace {
    algorithm: Algorithm,
    position: Cylinder,
    total: u64,
    sequence: Vec<Cylinder>,
    steps: Vec<MovementStep>,
}

impl Trace {
    pub(crate) fn start(algorithm: Algorithm, head: Cylinder) -> Self {
        Self {
            algorithm,
            position: head,
            total: 0,
            sequence: vec![head],
            steps: Vec::new(),
        }
    }

    /// Current head position.
    pub(crate) fn position(&self) -> Cylinder {
        self.position
    }

    /// Moves to and services a request.
    pub(crate) fn visit(&mut self, to: Cylinder) {
        self.push(MovementStep::new(self.position, to, self.total));
    }

    /// Moves to a boundary waypoint without servicing anything.
    pub(crate) fn visit_boundary(&mut self, to: Cylinder) {
        self.push(MovementStep::boundary(self.position, to, self.total));
    }

    /// Jumps from the current position to cylinder 0.
    pub(crate) fn wrap(&mut self) {
        self.push(MovementStep::wrap(self.position, self.total));
    }

    pub(crate) fn finish(self) -> AlgorithmResult {
        AlgorithmResult {
            algorithm: self.algorithm,
            sequence: self.sequence,
            steps: self.steps,
            total_movement: self.total,
        }
    }

    fn push(&mut self, step: MovementStep) {
        self.position = step.to;
        self.total = step.running_total;
        self.sequence.push(step.to);
        self.steps.push(step);
    }
}
