//! Placement of an image inside its slot.
//!
//! Images are scaled (up or down) to the largest size that fits the slot's
//! padded box while preserving aspect ratio, then centred horizontally and
//! pinned `padding_y` pixels above the slot's bottom edge.

use serde::{Deserialize, Serialize};

use super::SlotGeometry;

/// Natural pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions from a width/height pair.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height divided by width, or `None` for degenerate images.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.height) / f64::from(self.width))
    }
}

/// Where an image is drawn relative to its slot's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImagePlacement {
    /// Rendered image width.
    pub width: i32,
    /// Rendered image height.
    pub height: i32,
    /// Offset from the slot's left edge.
    pub left: i32,
    /// Offset from the slot's bottom edge.
    pub bottom: i32,
}

/// Largest `(width, height)` with the image's aspect ratio that fits inside
/// `max_width × max_height`.
#[must_use]
pub fn fit_within(
    natural: Dimensions,
    max_width: i32,
    max_height: i32,
) -> Option<(i32, i32)> {
    let aspect = natural.aspect_ratio()?;
    let max_width = max_width.max(0);
    let max_height = max_height.max(0);
    if max_width == 0 || max_height == 0 {
        return Some((0, 0));
    }

    let box_aspect = f64::from(max_height) / f64::from(max_width);
    if aspect > box_aspect {
        let width = (f64::from(max_height) / aspect).round() as i32;
        Some((width, max_height))
    } else {
        let height = (f64::from(max_width) * aspect).round() as i32;
        Some((max_width, height))
    }
}

/// Place an image with known natural dimensions inside `slot`.
///
/// Returns `None` while the dimensions are unknown; the sink shows its
/// loading state for such slots.
#[must_use]
pub fn place_image(
    natural: Option<Dimensions>,
    slot: SlotGeometry,
    padding_x: u32,
    padding_y: u32,
) -> Option<ImagePlacement> {
    let padding_x = padding_x as i32;
    let padding_y = padding_y as i32;
    let inner_width = slot.width - 2 * padding_x;
    let inner_height = slot.height - 2 * padding_y;
    let (width, height) = fit_within(natural?, inner_width, inner_height)?;

    let left = if width == 0 {
        0
    } else if width < inner_width {
        (slot.width - width) / 2
    } else {
        padding_x
    };

    Some(ImagePlacement {
        width,
        height,
        left,
        bottom: padding_y,
    })
}

/// Horizontal space the fitted image plus its padding occupies in `slot`.
///
/// Used by the maximize guard: once a growing slot is wider than this the
/// image is height-bound and further widening has no visible effect.
#[must_use]
pub fn image_extent(
    natural: Option<Dimensions>,
    slot: SlotGeometry,
    padding_x: u32,
    padding_y: u32,
) -> Option<i32> {
    place_image(natural, slot, padding_x, padding_y)
        .map(|p| p.width + 2 * padding_x as i32)
}
