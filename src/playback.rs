//! Step-by-step head playback.
//!
//! Turns a computed [`AlgorithmResult`] into the frames a display walks
//! through: where the head is, where it goes next, in which direction, and
//! whether the target is a request to mark as serviced. The iterator itself
//! never sleeps; consumers wait [`Playback::delay`] between frames.
//! Playback cannot be cancelled mid-run: a new run simply replaces the old
//! one.

use std::time::Duration;

use serde::Serialize;

use crate::models::{AlgorithmResult, Cylinder, MovementStep};

/// Default pause between frames.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(480);

/// Direction of one head movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Toward higher cylinders.
    Right,
    /// Toward lower cylinders.
    Left,
    /// Zero-length move (duplicate request or a request on the boundary).
    Idle,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    pub fn between(from: Cylinder, to: Cylinder) -> Self {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Direction::Right,
            std::cmp::Ordering::Greater => Direction::Left,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    /// Arrow glyph for display.
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Right => "→",
            Direction::Left => "←",
            Direction::Idle => "-",
        }
    }
}

/// One frame of head playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadFrame {
    /// 1-based step number.
    pub step: usize,
    /// Cylinder the head leaves.
    pub from: Cylinder,
    /// Cylinder the head moves to.
    pub to: Cylinder,
    /// Movement direction.
    pub direction: Direction,
    /// `to` is a pending request (not a boundary waypoint).
    pub services_request: bool,
    /// The C-SCAN jump back to cylinder 0.
    pub is_wrap: bool,
    /// `to` as a percentage of the disk width.
    pub position_percent: f64,
}

/// Iterator over the frames of a result.
///
/// # Example
/// ```
/// use u_seek::models::{Algorithm, SeekRequest};
/// use u_seek::playback::{Direction, Playback};
/// use u_seek::sequencing::SequencingEngine;
///
/// let request = SeekRequest::new(vec![10, 90], 50).with_max_cylinder(100);
/// let result = SequencingEngine::new().run(Algorithm::Cscan, &request);
///
/// let frames: Vec<_> = Playback::new(&result, request.max_cylinder).collect();
/// assert_eq!(frames.len(), 4);
/// assert_eq!(frames[0].direction, Direction::Right);
/// assert!(!frames[1].services_request);
/// assert_eq!(frames[1].position_percent, 100.0);
/// assert!(frames[2].is_wrap);
/// ```
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    steps: &'a [MovementStep],
    max_cylinder: Cylinder,
    delay: Duration,
    index: usize,
}

impl<'a> Playback<'a> {
    /// Creates a playback over `result` on a disk of `max_cylinder`.
    pub fn new(result: &'a AlgorithmResult, max_cylinder: Cylinder) -> Self {
        Self {
            steps: &result.steps,
            max_cylinder,
            delay: DEFAULT_STEP_DELAY,
            index: 0,
        }
    }

    /// Sets the pause between frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Pause consumers should wait between frames.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Total number of frames.
    pub fn frame_count(&self) -> usize {
        self.steps.len()
    }

    /// Percentage of the disk width for a cylinder.
    pub fn percent_of(&self, cylinder: Cylinder) -> f64 {
        if self.max_cylinder == 0 {
            0.0
        } else {
            f64::from(cylinder) / f64::from(self.max_cylinder) * 100.0
        }
    }
}

impl Iterator for Playback<'_> {
    type Item = HeadFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.get(self.index)?;
        self.index += 1;
        Some(HeadFrame {
            step: self.index,
            from: step.from,
            to: step.to,
            direction: Direction::between(step.from, step.to),
            services_request: !step.is_boundary,
            is_wrap: step.is_wrap,
            position_percent: self.percent_of(step.to),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.frame_count().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Playback<'_> {}
