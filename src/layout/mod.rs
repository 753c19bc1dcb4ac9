//! Pure geometry for the visible image strip.
//!
//! Given the number of visible slots (center, side images and the two
//! invisible sentinels), the viewport size and the layout options, this
//! module computes each slot's width, height and horizontal position. It
//! holds no state and performs no I/O.

pub mod fit;

pub use fit::{fit_within, image_extent, place_image, Dimensions, ImagePlacement};

use crate::error::CarouselError;
use crate::options::LayoutOptions;

/// Pixel size of the carousel's drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Height used when the host never sized the component.
    pub const DEFAULT_HEIGHT: u32 = 200;

    /// Viewport of the given size; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, CarouselError> {
        if width == 0 || height == 0 {
            return Err(CarouselError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Fallback size for an unsized component: 200px for the center image
    /// plus 200px per side-image pair.
    #[must_use]
    pub fn default_for(side_image_count: usize) -> Self {
        let pairs = u32::try_from(side_image_count).unwrap_or(u32::MAX);
        Self {
            width: pairs.saturating_mul(200).saturating_add(200),
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Size and horizontal position of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotGeometry {
    /// Slot width in pixels.
    pub width: i32,
    /// Slot height in pixels.
    pub height: i32,
    /// Left edge relative to the viewport.
    pub x: i32,
}

/// Number of slots for a given side-image count, sentinels included.
#[must_use]
pub const fn visible_count(side_count: usize) -> usize {
    side_count.saturating_mul(2).saturating_add(3)
}

/// Index of the center slot in a slot array of `visible_count` entries.
#[must_use]
pub const fn center_slot(visible_count: usize) -> usize {
    visible_count / 2
}

/// Clamp a requested side-image count so no image is shown twice.
///
/// Fewer than three images collapse to single-image mode; otherwise the
/// count is reduced until `2 * side + 1 <= image_count`.
#[must_use]
pub const fn fix_side_count(requested: usize, image_count: usize) -> usize {
    if image_count < 3 {
        0
    } else if requested > (image_count - 1) / 2 {
        (image_count - 1) / 2
    } else {
        requested
    }
}

#[inline]
fn round_px(value: f32) -> i32 {
    value.round() as i32
}

/// Compute the geometry of every slot in a strip of `visible_count` slots.
///
/// Slot `visible_count / 2` is the center. With no side images (single-image
/// or maximized mode) the center fills the viewport and the two sentinels
/// are parked just outside its edges. Otherwise the center takes
/// `center_relative_width` of the viewport and the remaining width is
/// handed out symmetrically, working outward: each side slot takes
/// `side_relative_width` of the remaining half, the outermost real slot
/// absorbs whatever half-width is left, and the sentinels get width 0.
/// Right-hand slots start one pixel after the center's right edge.
#[must_use]
pub fn compute_layout(
    visible_count: usize,
    viewport: Viewport,
    layout: &LayoutOptions,
) -> Vec<SlotGeometry> {
    let width = viewport.width as i32;
    let height = viewport.height as i32;
    let mut slots = vec![
        SlotGeometry {
            width: 0,
            height,
            x: 0,
        };
        visible_count
    ];
    if visible_count < 3 {
        return slots;
    }

    let center = center_slot(visible_count);
    let last = visible_count - 1;

    if center == 1 {
        slots[center] = SlotGeometry { width, height, x: 0 };
        slots[0].x = -2;
        slots[last].x = width + 2;
        return slots;
    }

    let relative = layout.center_relative_width;
    let viewport_width = width as f32;
    let center_width = round_px(relative * viewport_width);
    let center_x = round_px((1.0 - relative) / 2.0 * viewport_width);
    slots[center] = SlotGeometry {
        width: center_width,
        height,
        x: center_x,
    };

    let mut used = center_width;
    let mut left = center_x;
    let mut right = round_px((0.5 + relative / 2.0) * viewport_width) + 1;

    for i in 0..center {
        let remaining_half = (width - used) / 2;
        let slot_width = if i + 2 < center {
            round_px(remaining_half as f32 * layout.side_relative_width)
        } else if i + 2 == center {
            remaining_half
        } else {
            0
        };

        used += 2 * slot_width;
        left -= slot_width;
        slots[center - 1 - i] = SlotGeometry {
            width: slot_width,
            height,
            x: left,
        };
        slots[center + 1 + i] = SlotGeometry {
            width: slot_width,
            height,
            x: right,
        };
        right += slot_width;
    }

    slots
}
