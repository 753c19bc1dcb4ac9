use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::EasingFunction;
use crate::error::CarouselError;

/// Slide and maximize/restore animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Whether transitions are animated at all.
    #[schemars(title = "Animate")]
    pub enabled: bool,
    /// Duration of a single slide or maximize/restore, in milliseconds.
    #[schemars(title = "Duration (ms)", range(max = 5000), extend("step" = 10))]
    pub duration_ms: u32,
    /// Progress curve applied to every frame.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 200,
            easing: EasingFunction::Linear,
        }
    }
}

impl AnimationOptions {
    /// Configured duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Reject easing curves that leave `[0, 1]`.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.easing.is_bounded() {
            return Err(CarouselError::config(
                "easing",
                format!("{:?} has control points outside 0..=1", self.easing),
            ));
        }
        Ok(())
    }

    /// Whether transitions run over more than one frame.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}
