//! The carousel's complete interactive vocabulary.
//!
//! Every operation, whether triggered by a key press, wheel turn, click or
//! a host property change, is represented as a [`CarouselCommand`] and
//! passed to [`Carousel::execute`](super::Carousel::execute). Outbound
//! notifications are [`CarouselEvent`] values drained by the host.

use crate::options::Options;

/// Direction of a one-slot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Bring the image left of center into the middle (index - 1).
    Left,
    /// Bring the image right of center into the middle (index + 1).
    Right,
}

impl Direction {
    /// Step `index` one position in this direction, wrapping at `len`.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Left => (index + len - 1) % len,
            Self::Right => (index + 1) % len,
        }
    }
}

// ── Configuration payload ────────────────────────────────────────────────

/// A single host-driven configuration change.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigChange {
    /// Requested side images per side (at least 1).
    SideImageCount(usize),
    /// Share of the viewport taken by the center image, in `(0, 1)`.
    CenterRelativeWidth(f32),
    /// Side image reduction factor, in `[0.5, 0.8]`.
    SideRelativeWidth(f32),
    /// In-slot padding in pixels.
    Padding {
        /// Horizontal padding.
        x: u32,
        /// Vertical padding.
        y: u32,
    },
    /// Toggle mouse-over highlighting.
    MouseOverEffects(bool),
    /// Toggle animated transitions.
    AnimationEnabled(bool),
    /// Transition duration in milliseconds.
    AnimationDuration(u32),
    /// Replace every option at once.
    Options(Box<Options>),
}

// ── Commands ─────────────────────────────────────────────────────────────

/// Inbound carousel commands.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselCommand {
    /// Slide the strip by one image.
    Move(Direction),
    /// A slot was clicked: side slots move that many steps, the center slot
    /// toggles maximize.
    Click {
        /// Position of the clicked slot in the slot array.
        slot: usize,
    },
    /// Maximize the center image, or restore it if already maximized.
    ToggleMaximize,
    /// The viewport changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Jump to the first image.
    KeyHome,
    /// Jump to the last image.
    KeyEnd,
    /// Apply a configuration change.
    ConfigChange(ConfigChange),
    /// The pointer entered a slot (`Some`) or left the carousel (`None`).
    Hover(Option<usize>),
}

// ── Events ───────────────────────────────────────────────────────────────

/// Outbound notifications, emitted once per settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The center index is now the given value.
    CenterSelected(usize),
    /// A maximize or restore transition finished.
    MaximizeChanged {
        /// Whether the center image now fills the viewport.
        maximized: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_step_wraps() {
        assert_eq!(Direction::Left.step(0, 5), 4);
        assert_eq!(Direction::Left.step(3, 5), 2);
        assert_eq!(Direction::Right.step(4, 5), 0);
        assert_eq!(Direction::Right.step(0, 1), 0);
        assert_eq!(Direction::Left.step(0, 0), 0);
    }
}
