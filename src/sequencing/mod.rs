//! Seek sequencing algorithms and the engine that dispatches to them.
//!
//! Each algorithm turns a [`SeekRequest`] into an [`AlgorithmResult`]:
//! the ordered cylinders the head visits and the movement between them.
//! All algorithms are pure and deterministic; the caller's request list is
//! never mutated.
//!
//! # Usage
//!
//! ```
//! use u_seek::models::{Algorithm, SeekRequest};
//! use u_seek::sequencing::SequencingEngine;
//!
//! let request = SeekRequest::new(vec![10, 90], 50).with_max_cylinder(100);
//! let engine = SequencingEngine::new();
//!
//! let scan = engine.run(Algorithm::Scan, &request);
//! assert_eq!(scan.sequence, vec![50, 90, 100, 10]);
//! assert_eq!(scan.total_movement, 140);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4.3

pub mod algorithms;
mod engine;

pub use engine::SequencingEngine;

use crate::models::{Algorithm, AlgorithmResult, SeekRequest};
use std::fmt::Debug;

/// A disk-head scheduling algorithm.
///
/// Implementations must return a result whose sequence starts at
/// `request.head` and contains every request exactly once among its
/// non-boundary visits. An empty request set yields an idle result.
pub trait SeekAlgorithm: Send + Sync + Debug {
    /// Algorithm identifier.
    fn algorithm(&self) -> Algorithm;

    /// Computes the seek sequence for the given request set.
    fn sequence(&self, request: &SeekRequest) -> AlgorithmResult;

    /// Display name (e.g., "SSTF").
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Algorithm description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
