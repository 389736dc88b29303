//! Seek request (engine input) model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cylinder index on the simulated disk.
pub type Cylinder = u32;

/// Upper bound on the number of requests a caller should submit.
///
/// The engine itself does not enforce it; see [`crate::validation`].
pub const MAX_REQUESTS: usize = 1000;

/// Input for one sequencing run.
///
/// Bundles the pending cylinder requests (in arrival order), the starting
/// head position and the highest addressable cylinder.
///
/// # Example
/// ```
/// use u_seek::models::SeekRequest;
///
/// let request = SeekRequest::new(vec![98, 183, 37], 53).with_max_cylinder(199);
/// assert_eq!(request.len(), 3);
/// assert_eq!(request.max_cylinder, 199);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekRequest {
    /// Pending requests in arrival order.
    pub requests: Vec<Cylinder>,
    /// Starting head position.
    pub head: Cylinder,
    /// Highest cylinder on the disk.
    pub max_cylinder: Cylinder,
}

impl SeekRequest {
    /// Default disk size used when no bound is given.
    pub const DEFAULT_MAX_CYLINDER: Cylinder = 199;

    /// Creates a request set starting at `head`.
    pub fn new(requests: Vec<Cylinder>, head: Cylinder) -> Self {
        Self {
            requests,
            head,
            max_cylinder: Self::DEFAULT_MAX_CYLINDER,
        }
    }

    /// Sets the highest cylinder.
    pub fn with_max_cylinder(mut self, max_cylinder: Cylinder) -> Self {
        self.max_cylinder = max_cylinder;
        self
    }

    /// Number of pending requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether there are no pending requests.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns the requests sorted ascending and split at the head.
    ///
    /// `right` holds requests `>= head`, `left` holds requests `< head`;
    /// both are ascending. The caller's request order is untouched.
    pub(crate) fn partition_sorted(&self) -> (Vec<Cylinder>, Vec<Cylinder>) {
        let mut sorted = self.requests.clone();
        sorted.sort_unstable();
        let split = sorted.partition_point(|&c| c < self.head);
        let right = sorted.split_off(split);
        (sorted, right)
    }
}

/// Parses a request list such as `"98, 183 37"`.
///
/// Accepts commas and/or whitespace as separators.
pub fn parse_cylinders(input: &str) -> Result<Vec<Cylinder>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Cylinder>()
                .map_err(|_| Error::InvalidRequest(token.to_string()))
        })
        .collect()
}
