//! Horizontal swipe classification.

use serde::{Deserialize, Serialize};

/// Default confidence threshold for `|offset| * velocity`.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 10_000.0;

/// Swipe tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Outcome of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    None,
    Next,
    Previous,
}

/// Swipe power of a drag: `|offset| * velocity`.
///
/// Only the offset is made absolute, so the sign follows the release
/// velocity.
pub fn swipe_power(offset_x: f64, velocity_x: f64) -> f64 {
    offset_x.abs() * velocity_x
}

/// Classify a drag release. Strictly beyond the threshold in either
/// direction counts; a leftward fling advances.
pub fn classify_swipe(offset_x: f64, velocity_x: f64, threshold: f64) -> SwipeAction {
    let power = swipe_power(offset_x, velocity_x);
    if power < -threshold {
        SwipeAction::Next
    } else if power > threshold {
        SwipeAction::Previous
    } else {
        SwipeAction::None
    }
}

/// Parse an `offset,velocity` pair as reported by the client script.
pub fn parse_swipe(value: &str) -> Option<(f64, f64)> {
    let (offset, velocity) = value.split_once(',')?;
    let offset: f64 = offset.trim().parse().ok()?;
    let velocity: f64 = velocity.trim().parse().ok()?;
    (offset.is_finite() && velocity.is_finite()).then_some((offset, velocity))
}
