//! Movement step model.

use serde::{Deserialize, Serialize};

use super::Cylinder;

/// One head movement between two consecutive cylinders of a seek sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementStep {
    /// Cylinder the head leaves.
    pub from: Cylinder,
    /// Cylinder the head arrives at.
    pub to: Cylinder,
    /// `|to - from|`.
    pub distance: u64,
    /// Cumulative movement including this step.
    pub running_total: u64,
    /// C-SCAN return from the high end to cylinder 0.
    pub is_wrap: bool,
    /// `to` is a disk boundary waypoint rather than a serviced request.
    pub is_boundary: bool,
}

impl MovementStep {
    /// Creates a request-servicing step.
    pub fn new(from: Cylinder, to: Cylinder, previous_total: u64) -> Self {
        let distance = u64::from(from.abs_diff(to));
        Self {
            from,
            to,
            distance,
            running_total: previous_total + distance,
            is_wrap: false,
            is_boundary: false,
        }
    }

    /// Creates a step to a boundary waypoint.
    pub fn boundary(from: Cylinder, to: Cylinder, previous_total: u64) -> Self {
        Self {
            is_boundary: true,
            ..Self::new(from, to, previous_total)
        }
    }

    /// Creates the C-SCAN wrap step from `from` back to cylinder 0.
    pub fn wrap(from: Cylinder, previous_total: u64) -> Self {
        Self {
            is_wrap: true,
            ..Self::boundary(from, 0, previous_total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_distance() {
        let down = MovementStep::new(183, 37, 130);
        assert_eq!(down.distance, 146);
        assert_eq!(down.running_total, 276);
        assert!(!down.is_wrap);
        assert!(!down.is_boundary);
    }

    #[test]
    fn test_wrap_step() {
        let wrap = MovementStep::wrap(100, 50);
        assert_eq!(wrap.to, 0);
        assert_eq!(wrap.distance, 100);
        assert_eq!(wrap.running_total, 150);
        assert!(wrap.is_wrap);
        assert!(wrap.is_boundary);
    }
}
