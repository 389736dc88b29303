//! Sequencing engine.
//!
//! Dispatches requests to the registered seek algorithms. The engine holds
//! no per-run state, so one instance can serve any number of runs.

use std::sync::Arc;

use tracing::debug;

use super::algorithms::{CLook, CScan, Fcfs, Look, Scan, Sstf};
use super::SeekAlgorithm;
use crate::models::{Algorithm, AlgorithmResult, SeekRequest};

/// Stateless front end over the seek algorithms.
///
/// # Example
/// ```
/// use u_seek::models::{Algorithm, SeekRequest};
/// use u_seek::sequencing::SequencingEngine;
///
/// let request = SeekRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
/// let results = SequencingEngine::new().run_all(&request);
///
/// assert_eq!(results.len(), 6);
/// assert_eq!(results[0].algorithm, Algorithm::Fcfs);
/// assert_eq!(results[0].total_movement, 640);
/// ```
#[derive(Clone)]
pub struct SequencingEngine {
    algorithms: Vec<Arc<dyn SeekAlgorithm>>,
}

impl SequencingEngine {
    /// Creates an engine with all six algorithms registered in
    /// [`Algorithm::ALL`] order.
    pub fn new() -> Self {
        Algorithm::ALL
            .iter()
            .fold(Self::empty(), |engine, &alg| engine.with_algorithm(alg))
    }

    /// Creates an engine with no registered algorithms.
    pub fn empty() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Registers an algorithm for [`run_all`](Self::run_all).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.push(Self::resolve(algorithm));
        self
    }

    /// Registers a custom implementation.
    pub fn with_implementation<A: SeekAlgorithm + 'static>(mut self, implementation: A) -> Self {
        self.algorithms.push(Arc::new(implementation));
        self
    }

    /// Registered algorithms in run order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.algorithms.iter().map(|a| a.algorithm()).collect()
    }

    /// Returns the built-in implementation of an algorithm.
    pub fn resolve(algorithm: Algorithm) -> Arc<dyn SeekAlgorithm> {
        match algorithm {
            Algorithm::Fcfs => Arc::new(Fcfs),
            Algorithm::Sstf => Arc::new(Sstf),
            Algorithm::Scan => Arc::new(Scan),
            Algorithm::Cscan => Arc::new(CScan),
            Algorithm::Look => Arc::new(Look),
            Algorithm::Clook => Arc::new(CLook),
        }
    }

    /// Runs a single algorithm.
    ///
    /// Uses the registered implementation when there is one, otherwise the
    /// built-in.
    pub fn run(&self, algorithm: Algorithm, request: &SeekRequest) -> AlgorithmResult {
        let implementation = self
            .algorithms
            .iter()
            .find(|a| a.algorithm() == algorithm)
            .cloned()
            .unwrap_or_else(|| Self::resolve(algorithm));
        Self::execute(implementation.as_ref(), request)
    }

    /// Runs every registered algorithm, in registration order.
    pub fn run_all(&self, request: &SeekRequest) -> Vec<AlgorithmResult> {
        self.algorithms
            .iter()
            .map(|a| Self::execute(a.as_ref(), request))
            .collect()
    }

    /// Runs the given algorithms, in the given order.
    pub fn run_selected(
        &self,
        algorithms: &[Algorithm],
        request: &SeekRequest,
    ) -> Vec<AlgorithmResult> {
        algorithms.iter().map(|&a| self.run(a, request)).collect()
    }

    fn execute(implementation: &dyn SeekAlgorithm, request: &SeekRequest) -> AlgorithmResult {
        let result = implementation.sequence(request);
        debug!(
            algorithm = implementation.name(),
            requests = request.len(),
            head = request.head,
            total = result.total_movement,
            "sequenced requests"
        );
        result
    }
}

impl Default for SequencingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SequencingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequencingEngine")
            .field(
                "algorithms",
                &self.algorithms.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
