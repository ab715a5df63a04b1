//! Slide motion frames for renderers.
//!
//! A slide entering moves in from the side the carousel is travelling
//! toward; the outgoing slide leaves toward the opposite side. Renderers
//! interpolate between frames with [`SpringTransition`].

use serde::Serialize;

use crate::engine::Direction;

/// Default horizontal travel of a slide, in pixels.
pub const DEFAULT_SLIDE_OFFSET: f64 = 1000.0;

/// Where a slide is in its enter/exit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Enter,
    Center,
    Exit,
}

/// Visual placement of a slide at one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionFrame {
    pub x: f64,
    pub opacity: f64,
    /// `None` leaves stacking to document order.
    pub z_index: Option<i32>,
}

impl MotionFrame {
    /// Inline style for the frame.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "transform: translateX({}px); opacity: {};",
            self.x, self.opacity
        );
        if let Some(z) = self.z_index {
            css.push_str(&format!(" z-index: {};", z));
        }
        css
    }
}

/// Frame for `phase` when the carousel moves in `direction`.
pub fn frame(phase: Phase, direction: Direction, offset: f64) -> MotionFrame {
    let toward = match direction {
        Direction::Forward => offset,
        Direction::Backward => -offset,
    };

    match phase {
        Phase::Enter => MotionFrame {
            x: toward,
            opacity: 0.0,
            z_index: None,
        },
        Phase::Center => MotionFrame {
            x: 0.0,
            opacity: 1.0,
            z_index: Some(1),
        },
        Phase::Exit => MotionFrame {
            x: -toward,
            opacity: 0.0,
            z_index: Some(0),
        },
    }
}

/// Spring and fade parameters applied between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringTransition {
    pub stiffness: f64,
    pub damping: f64,
    /// Opacity fade duration in seconds.
    pub opacity_duration: f64,
    /// Background image zoom: starting scale, eased to 1 over `zoom_duration`.
    pub zoom_from: f64,
    pub zoom_duration: f64,
}

impl Default for SpringTransition {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            opacity_duration: 0.2,
            zoom_from: 1.2,
            zoom_duration: 6.0,
        }
    }
}

impl SpringTransition {
    /// Approximate settle time of the spring as a CSS duration, in ms.
    ///
    /// Uses four time constants of a unit-mass damped spring, `4 * 2m / c`.
    pub fn settle_ms(&self) -> u64 {
        if self.damping <= 0.0 {
            return 0;
        }
        ((8.0 / self.damping) * 1000.0).round() as u64
    }

    /// CSS `transition` value approximating the spring.
    pub fn to_css(&self) -> String {
        format!(
            "transform {}ms cubic-bezier(0.22, 1, 0.36, 1), opacity {}ms ease",
            self.settle_ms(),
            (self.opacity_duration * 1000.0).round() as u64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_frames() {
        assert_eq!(
            frame(Phase::Enter, Direction::Forward, 1000.0),
            MotionFrame { x: 1000.0, opacity: 0.0, z_index: None }
        );
        assert_eq!(
            frame(Phase::Exit, Direction::Forward, 1000.0),
            MotionFrame { x: -1000.0, opacity: 0.0, z_index: Some(0) }
        );
    }

    #[test]
    fn test_backward_frames() {
        assert_eq!(frame(Phase::Enter, Direction::Backward, 1000.0).x, -1000.0);
        assert_eq!(frame(Phase::Exit, Direction::Backward, 1000.0).x, 1000.0);
    }

    #[test]
    fn test_center_independent_of_direction() {
        for direction in [Direction::Forward, Direction::Backward] {
            let center = frame(Phase::Center, direction, DEFAULT_SLIDE_OFFSET);
            assert_eq!(center, MotionFrame { x: 0.0, opacity: 1.0, z_index: Some(1) });
        }
    }

    #[test]
    fn test_enter_and_exit_are_opposite() {
        for direction in [Direction::Forward, Direction::Backward] {
            let enter = frame(Phase::Enter, direction, 640.0);
            let exit = frame(Phase::Exit, direction, 640.0);
            assert_eq!(enter.x, -exit.x);
            assert!(enter.x != 0.0);
        }
    }

    #[test]
    fn test_frame_css() {
        let css = frame(Phase::Exit, Direction::Forward, 1000.0).to_css();
        assert_eq!(css, "transform: translateX(-1000px); opacity: 0; z-index: 0;");
    }

    #[test]
    fn test_spring_defaults() {
        let spring = SpringTransition::default();
        assert_eq!(spring.stiffness, 300.0);
        assert_eq!(spring.damping, 30.0);
        assert_eq!(spring.settle_ms(), 267);
        assert!(spring.to_css().ends_with("opacity 200ms ease"));
    }
}
