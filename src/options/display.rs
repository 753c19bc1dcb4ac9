use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Mouse-over highlight settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Dim non-hovered images and highlight the one under the pointer.
    #[schemars(title = "Mouse-over Effects")]
    pub mouse_over_effects: bool,
    /// Opacity of side images while mouse-over effects are on.
    #[schemars(title = "Side Opacity", range(min = 0.0, max = 1.0))]
    pub side_opacity: f32,
    /// Opacity of the center image while mouse-over effects are on.
    #[schemars(title = "Center Opacity", range(min = 0.0, max = 1.0))]
    pub center_opacity: f32,
    /// Opacity of the hovered image.
    #[schemars(title = "Hover Opacity", range(min = 0.0, max = 1.0))]
    pub hover_opacity: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            mouse_over_effects: false,
            side_opacity: 0.7,
            center_opacity: 0.9,
            hover_opacity: 1.0,
        }
    }
}

impl DisplayOptions {
    /// Check that all opacities are within `[0, 1]`.
    pub fn validate(&self) -> Result<(), CarouselError> {
        for (field, value) in [
            ("side_opacity", self.side_opacity),
            ("center_opacity", self.center_opacity),
            ("hover_opacity", self.hover_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CarouselError::config(
                    field,
                    format!("{value} is not between 0 and 1"),
                ));
            }
        }
        Ok(())
    }

    /// Resting opacity of a slot when nothing special is going on.
    ///
    /// Highlighting is suppressed while the center image is maximized.
    #[must_use]
    pub fn base_opacity(&self, is_center: bool, hovered: bool, maximized: bool) -> f32 {
        if !self.mouse_over_effects || maximized {
            return 1.0;
        }
        if hovered {
            self.hover_opacity
        } else if is_center {
            self.center_opacity
        } else {
            self.side_opacity
        }
    }
}
