use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Geometry of the visible image strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Requested number of images on each side of the center image.
    #[schemars(title = "Side Images", range(min = 1))]
    pub side_image_count: usize,
    /// Share of the viewport width taken by the center image.
    #[schemars(
        title = "Center Width",
        extend("exclusiveMinimum" = 0.0, "exclusiveMaximum" = 1.0, "step" = 0.01)
    )]
    pub center_relative_width: f32,
    /// Factor by which each further side image shrinks relative to the
    /// remaining width.
    #[schemars(title = "Side Reduction", range(min = 0.5, max = 0.8), extend("step" = 0.01))]
    pub side_relative_width: f32,
    /// Horizontal padding (px) inside each slot.
    #[schemars(title = "Padding X")]
    pub padding_x: u32,
    /// Vertical padding (px) inside each slot.
    #[schemars(title = "Padding Y")]
    pub padding_y: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            side_image_count: 2,
            center_relative_width: 0.4,
            side_relative_width: 0.6,
            padding_x: 3,
            padding_y: 2,
        }
    }
}

impl LayoutOptions {
    /// Check that every field is inside its accepted range.
    pub fn validate(&self) -> Result<(), CarouselError> {
        validate_side_image_count(self.side_image_count)?;
        validate_center_relative_width(self.center_relative_width)?;
        validate_side_relative_width(self.side_relative_width)
    }
}

pub(crate) fn validate_side_image_count(count: usize) -> Result<(), CarouselError> {
    if count < 1 {
        return Err(CarouselError::config(
            "side_image_count",
            "minimum allowed value is 1",
        ));
    }
    Ok(())
}

pub(crate) fn validate_center_relative_width(width: f32) -> Result<(), CarouselError> {
    if !(width > 0.0 && width < 1.0) {
        return Err(CarouselError::config(
            "center_relative_width",
            format!("{width} is not strictly between 0 and 1"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_side_relative_width(width: f32) -> Result<(), CarouselError> {
    if !(0.5..=0.8).contains(&width) {
        return Err(CarouselError::config(
            "side_relative_width",
            format!("{width} is not between 0.5 and 0.8"),
        ));
    }
    Ok(())
}
