//! Hero carousel for the Lumiere storefront.
//!
//! - **Slides**: [`SlideDeck`], the ordered content cycle
//! - **Engine**: [`CarouselEngine`], the active-slide state machine
//! - **Gestures**: [`classify_swipe`], drag release to navigation
//! - **Motion**: [`motion::frame`], enter/center/exit placement per direction
//! - **Autoplay** (feature `driver`): [`CarouselDriver`], a tokio task that
//!   ticks the engine on a fixed period
//!
//! # Example
//!
//! ```
//! use lumiere_carousel::prelude::*;
//!
//! let deck = SlideDeck::hero();
//! let mut engine = CarouselEngine::new(deck.len(), SwipeConfig::default()).unwrap();
//!
//! engine.apply(Transition::Previous);
//! assert_eq!(engine.active_index(), deck.len() - 1);
//! assert_eq!(engine.direction(), Direction::Backward);
//! ```

#[cfg(feature = "driver")]
pub mod autoplay;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod motion;
pub mod slide;

#[cfg(feature = "driver")]
pub use autoplay::{CarouselDriver, CarouselHandle, DEFAULT_AUTOPLAY_INTERVAL};
pub use engine::{CarouselEngine, CarouselState, Direction, Transition};
pub use error::CarouselError;
pub use gesture::{classify_swipe, parse_swipe, SwipeAction, SwipeConfig};
pub use slide::{Slide, SlideDeck};

/// Prelude for convenient imports.
pub mod prelude {
    #[cfg(feature = "driver")]
    pub use crate::autoplay::{CarouselDriver, CarouselHandle};
    pub use crate::engine::{CarouselEngine, CarouselState, Direction, Transition};
    pub use crate::error::CarouselError;
    pub use crate::gesture::{classify_swipe, SwipeAction, SwipeConfig};
    pub use crate::motion::{frame, MotionFrame, Phase, SpringTransition};
    pub use crate::slide::{Slide, SlideDeck};
}
