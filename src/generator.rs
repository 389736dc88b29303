//! Random request generation.
//!
//! Draws request sets from an injected RNG so that callers choose between
//! reproducible (seeded) and ambient randomness.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_seek::generator::RequestGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let requests = RequestGenerator::new(199).with_count(8).generate(&mut rng);
//! assert_eq!(requests.len(), 8);
//! assert!(requests.iter().all(|&c| c <= 199));
//! ```

use rand::Rng;

use crate::models::{Cylinder, MAX_REQUESTS};

/// Uniform random request generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestGenerator {
    /// Highest cylinder that may be drawn.
    pub max_cylinder: Cylinder,
    /// Requested count; clamped to `1..=MAX_REQUESTS` when generating.
    pub count: usize,
}

impl RequestGenerator {
    /// Default number of requests.
    pub const DEFAULT_COUNT: usize = 8;

    /// Creates a generator over `0..=max_cylinder`.
    pub fn new(max_cylinder: Cylinder) -> Self {
        Self {
            max_cylinder,
            count: Self::DEFAULT_COUNT,
        }
    }

    /// Sets the number of requests.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Number of requests that [`generate`](Self::generate) will produce.
    #[inline]
    pub fn effective_count(&self) -> usize {
        self.count.clamp(1, MAX_REQUESTS)
    }

    /// Draws a request set, each cylinder uniform in `0..=max_cylinder`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Cylinder> {
        (0..self.effective_count())
            .map(|_| rng.random_range(0..=self.max_cylinder))
            .collect()
    }
}
