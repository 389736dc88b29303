//! Disk-seek domain models.
//!
//! Provides the value types exchanged between the sequencing engine and
//! its consumers. Every type is plain data: the engine receives a
//! [`SeekRequest`] and hands back a freshly allocated [`AlgorithmResult`].
//!
//! # Terminology
//!
//! | Term | Meaning |
//! |------|---------|
//! | Cylinder | Integer position on the simulated disk, `0..=max_cylinder` |
//! | Head | Current cylinder of the read/write actuator |
//! | Seek sequence | Ordered cylinders visited, starting at the head |
//! | Wrap step | C-SCAN return from the high boundary to cylinder 0 |

mod algorithm;
mod request;
mod result;
mod step;

pub use algorithm::Algorithm;
pub use request::{parse_cylinders, Cylinder, SeekRequest, MAX_REQUESTS};
pub use result::AlgorithmResult;
pub(crate) use result::Trace;
pub use step::MovementStep;
