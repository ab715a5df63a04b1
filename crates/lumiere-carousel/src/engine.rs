//! Active-slide state machine.
//!
//! The engine owns the active index and the direction of the last move.
//! Every input goes through [`CarouselEngine::apply`]; the autoplay timer
//! and manual controls are just different [`Transition`]s.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gesture::{classify_swipe, SwipeAction, SwipeConfig};
use crate::CarouselError;

/// Direction of the most recent move, used to pick enter/exit motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Parse a URL value; anything but `backward` is forward.
    pub fn from_value(value: &str) -> Self {
        if value == "backward" {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Snapshot of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
}

/// Inputs accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Autoplay timer fired.
    Tick,
    Next,
    Previous,
    /// Indicator click. Out-of-range targets clamp to the last slide.
    JumpTo(usize),
    /// Drag released with the given horizontal offset and velocity.
    Swipe { offset_x: f64, velocity_x: f64 },
}

/// Cyclic carousel over `slide_count` slides.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselEngine {
    state: CarouselState,
    slide_count: usize,
    swipe: SwipeConfig,
}

impl CarouselEngine {
    /// Start at slide 0, moving forward.
    pub fn new(slide_count: usize, swipe: SwipeConfig) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self {
            state: CarouselState::default(),
            slide_count,
            swipe,
        })
    }

    /// Resume from a previously rendered state. The index is clamped.
    pub fn resume(mut self, state: CarouselState) -> Self {
        self.state = CarouselState {
            active_index: state.active_index.min(self.slide_count - 1),
            direction: state.direction,
        };
        self
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn swipe_config(&self) -> SwipeConfig {
        self.swipe
    }

    /// Index a `Next` would land on.
    pub fn next_index(&self) -> usize {
        (self.state.active_index + 1) % self.slide_count
    }

    /// Index a `Previous` would land on.
    pub fn previous_index(&self) -> usize {
        (self.state.active_index + self.slide_count - 1) % self.slide_count
    }

    /// Apply one input. Returns whether the active slide changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let before = self.state.active_index;

        match transition {
            Transition::Tick | Transition::Next => self.advance(),
            Transition::Previous => self.retreat(),
            Transition::JumpTo(target) => {
                let target = target.min(self.slide_count - 1);
                self.state.direction = if target > before {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                self.state.active_index = target;
            }
            Transition::Swipe {
                offset_x,
                velocity_x,
            } => match classify_swipe(offset_x, velocity_x, self.swipe.threshold) {
                SwipeAction::Next => self.advance(),
                SwipeAction::Previous => self.retreat(),
                SwipeAction::None => {}
            },
        }

        let changed = self.state.active_index != before;
        debug!(
            ?transition,
            from = before,
            to = self.state.active_index,
            direction = self.state.direction.as_str(),
            "carousel transition"
        );
        changed
    }

    fn advance(&mut self) {
        self.state.direction = Direction::Forward;
        self.state.active_index = self.next_index();
    }

    fn retreat(&mut self) {
        self.state.direction = Direction::Backward;
        self.state.active_index = self.previous_index();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(n: usize) -> CarouselEngine {
        CarouselEngine::new(n, SwipeConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let e = engine(3);
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.direction(), Direction::Forward);
    }

    #[test]
    fn test_zero_slides_rejected() {
        assert_eq!(
            CarouselEngine::new(0, SwipeConfig::default()),
            Err(CarouselError::EmptyDeck)
        );
    }

    #[test]
    fn test_ticks_cycle() {
        let mut e = engine(3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            e.apply(Transition::Tick);
            seen.push(e.active_index());
        }
        assert_eq!(seen, [1, 2, 0, 1]);
        assert_eq!(e.direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_wraps() {
        let mut e = engine(3);
        assert!(e.apply(Transition::Previous));
        assert_eq!(e.state(), CarouselState { active_index: 2, direction: Direction::Backward });
    }

    #[test]
    fn test_next_then_previous_returns() {
        let mut e = engine(5).resume(CarouselState {
            active_index: 3,
            direction: Direction::Forward,
        });
        e.apply(Transition::Next);
        e.apply(Transition::Previous);
        assert_eq!(e.active_index(), 3);
    }

    #[test]
    fn test_jump_direction() {
        let mut e = engine(3);
        e.apply(Transition::JumpTo(2));
        assert_eq!(e.state(), CarouselState { active_index: 2, direction: Direction::Forward });
        e.apply(Transition::JumpTo(0));
        assert_eq!(e.state(), CarouselState { active_index: 0, direction: Direction::Backward });
    }

    #[test]
    fn test_jump_to_current_is_backward_and_unchanged() {
        let mut e = engine(3);
        assert!(!e.apply(Transition::JumpTo(0)));
        assert_eq!(e.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_out_of_range_clamps() {
        let mut e = engine(3);
        e.apply(Transition::JumpTo(8));
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn test_swipe() {
        let mut e = engine(3);
        assert!(e.apply(Transition::Swipe { offset_x: -200.0, velocity_x: -100.0 }));
        assert_eq!(e.state(), CarouselState { active_index: 1, direction: Direction::Forward });

        assert!(e.apply(Transition::Swipe { offset_x: 200.0, velocity_x: 100.0 }));
        assert_eq!(e.state(), CarouselState { active_index: 0, direction: Direction::Backward });

        assert!(!e.apply(Transition::Swipe { offset_x: 100.0, velocity_x: -100.0 }));
        assert_eq!(e.state(), CarouselState { active_index: 0, direction: Direction::Backward });
    }

    #[test]
    fn test_single_slide_never_changes() {
        let mut e = engine(1);
        assert!(!e.apply(Transition::Tick));
        assert!(!e.apply(Transition::Previous));
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.direction(), Direction::Backward);
    }

    #[test]
    fn test_resume_clamps() {
        let e = engine(3).resume(CarouselState {
            active_index: 9,
            direction: Direction::Backward,
        });
        assert_eq!(e.active_index(), 2);
        assert_eq!(e.next_index(), 0);
        assert_eq!(e.previous_index(), 1);
    }

    #[test]
    fn test_direction_values() {
        assert_eq!(Direction::from_value("backward"), Direction::Backward);
        assert_eq!(Direction::from_value("sideways"), Direction::Forward);
        assert_eq!(Direction::Backward.as_str(), "backward");
    }
}
