use std::collections::VecDeque;

use super::command::Direction;

/// Which transition, if any, is in flight.
///
/// Resizing is not a phase of its own: a resize recomputes geometry
/// synchronously, or is folded into the next settle while animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing is animating.
    #[default]
    Idle,
    /// The strip is sliding by one slot.
    Sliding(Direction),
    /// The center image is growing to fill the viewport.
    Maximizing,
    /// The center image is shrinking back into the strip.
    Restoring,
}

/// Navigation state owned by the carousel.
///
/// `active_side_count == 0 && saved_side_count != 0` means maximized. With
/// fewer than three images the active count is always 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Image URLs, in display order.
    pub urls: Vec<String>,
    /// Index of the selected image; meaningful only when `urls` is non-empty.
    pub center_index: usize,
    /// Side images currently shown on each side of the center.
    pub active_side_count: usize,
    /// Side count to return to on restore; 0 when not maximized.
    pub saved_side_count: usize,
    /// Whether a transition is in flight.
    pub animation_running: bool,
    /// Moves requested during a transition, oldest first.
    pub pending_moves: VecDeque<Direction>,
}

impl CarouselState {
    /// Number of images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.urls.len()
    }

    /// Whether the center image fills the viewport.
    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.active_side_count == 0 && self.saved_side_count != 0
    }
}
