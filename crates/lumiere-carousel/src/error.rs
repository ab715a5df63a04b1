//! Carousel error types.

use thiserror::Error;

/// Errors that can occur when building or driving a carousel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("Carousel deck is empty")]
    EmptyDeck,

    /// Two slides share an id.
    #[error("Duplicate slide id: {0}")]
    DuplicateSlide(u32),

    /// Autoplay needs a non-zero period.
    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,

    /// The autoplay driver task is no longer running.
    #[error("Carousel driver closed")]
    DriverClosed,
}
