//! Disk-head scheduling simulator.
//!
//! Computes the order in which a simulated disk head services cylinder
//! requests under six classic algorithms, the movement each one costs,
//! and text renderings of the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SeekRequest`, `AlgorithmResult`,
//!   `MovementStep`, `Algorithm`
//! - **`sequencing`**: The six algorithms and the stateless `SequencingEngine`
//! - **`metrics`**: Per-run KPIs and FCFS-relative comparisons
//! - **`validation`**: Range checks callers run before sequencing
//! - **`generator`**: Random request sets from an injected RNG
//! - **`playback`**: Frame iterator for step-by-step head animation
//! - **`render`**: Tables, sequence strings and an ASCII seek chart
//! - **`config`**: TOML-backed simulator defaults
//!
//! # Architecture
//!
//! The sequencing engine is pure: no I/O, no shared state, no randomness.
//! Everything else consumes its output. Request generation and timing
//! live outside it.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Worthington, Ganger & Patt (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod playback;
pub mod render;
pub mod sequencing;
pub mod validation;

pub use config::SimulatorConfig;
pub use error::{Error, Result};
