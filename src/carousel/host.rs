//! Host property channel: image list, center index, configuration and
//! image dimension results.

use super::{Carousel, ConfigChange};
use crate::error::CarouselError;
use crate::layout::{fix_side_count, Dimensions, Viewport};
use crate::options::{
    validate_center_relative_width, validate_side_image_count,
    validate_side_relative_width, Options,
};
use crate::resolver::ResolutionFailure;
use crate::sink::VisualSink;

impl<S: VisualSink> Carousel<S> {
    /// Replace the image list.
    ///
    /// The center index is kept when still in range, otherwise reset to 0.
    /// Declined while a transition is in flight.
    pub fn set_images(&mut self, urls: Vec<String>) -> Result<(), CarouselError> {
        if !self.attached {
            return Ok(());
        }
        if self.state.animation_running {
            log::warn!("set_images declined: {:?} in progress", self.phase);
            return Err(CarouselError::AnimationInProgress);
        }
        self.state.urls = urls;
        self.state.pending_moves.clear();
        if self.state.center_index >= self.state.image_count() {
            self.state.center_index = 0;
        }
        self.hovered = None;
        self.refresh_side_count();
        log::debug!(
            "{} images, {} side images",
            self.state.image_count(),
            self.state.active_side_count
        );
        self.render();
        Ok(())
    }

    /// Select the image at `index` without animating.
    pub fn set_center_index(&mut self, index: usize) -> Result<(), CarouselError> {
        if !self.attached {
            return Ok(());
        }
        let len = self.state.image_count();
        if index >= len {
            return Err(CarouselError::Index { index, len });
        }
        if self.state.animation_running {
            log::warn!("set_center_index declined: {:?} in progress", self.phase);
            return Err(CarouselError::AnimationInProgress);
        }
        self.state.center_index = index;
        self.render();
        Ok(())
    }

    /// Requested side images per side.
    pub fn set_side_image_count(&mut self, count: usize) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::SideImageCount(count))
    }

    /// Share of the viewport width taken by the center image.
    pub fn set_center_relative_width(&mut self, width: f32) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::CenterRelativeWidth(width))
    }

    /// Side image reduction factor.
    pub fn set_side_relative_width(&mut self, width: f32) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::SideRelativeWidth(width))
    }

    /// In-slot padding.
    pub fn set_padding(&mut self, x: u32, y: u32) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::Padding { x, y })
    }

    /// Toggle mouse-over highlighting.
    pub fn set_mouse_over_effects(&mut self, enabled: bool) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::MouseOverEffects(enabled))
    }

    /// Toggle animated transitions.
    pub fn set_animation_enabled(&mut self, enabled: bool) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::AnimationEnabled(enabled))
    }

    /// Transition duration in milliseconds.
    pub fn set_animation_duration(&mut self, duration_ms: u32) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::AnimationDuration(duration_ms))
    }

    /// Replace every option; the previous options stay on error.
    pub fn apply_options(&mut self, options: Options) -> Result<(), CarouselError> {
        self.apply_config(ConfigChange::Options(Box::new(options)))
    }

    /// Validate and store one configuration change, then rebuild the window
    /// (immediately when idle, at the next settle otherwise).
    pub(super) fn apply_config(&mut self, change: ConfigChange) -> Result<(), CarouselError> {
        if !self.attached {
            return Ok(());
        }
        let layout = &mut self.options.layout;
        match change {
            ConfigChange::SideImageCount(count) => {
                validate_side_image_count(count)?;
                layout.side_image_count = count;
            }
            ConfigChange::CenterRelativeWidth(width) => {
                validate_center_relative_width(width)?;
                layout.center_relative_width = width;
            }
            ConfigChange::SideRelativeWidth(width) => {
                validate_side_relative_width(width)?;
                layout.side_relative_width = width;
            }
            ConfigChange::Padding { x, y } => {
                layout.padding_x = x;
                layout.padding_y = y;
            }
            ConfigChange::MouseOverEffects(enabled) => {
                self.options.display.mouse_over_effects = enabled;
            }
            ConfigChange::AnimationEnabled(enabled) => {
                self.options.animation.enabled = enabled;
                return Ok(());
            }
            ConfigChange::AnimationDuration(duration_ms) => {
                self.options.animation.duration_ms = duration_ms;
                return Ok(());
            }
            ConfigChange::Options(options) => {
                options.validate()?;
                self.options = *options;
            }
        }

        if self.state.animation_running {
            self.config_dirty = true;
        } else {
            self.refresh_side_count();
            self.render();
        }
        Ok(())
    }

    /// Resize the drawing area, keeping the current slot array.
    pub(super) fn resize(&mut self, width: u32, height: u32) -> Result<(), CarouselError> {
        self.viewport = Viewport::new(width, height)?;
        self.sized = true;
        if self.state.animation_running {
            self.config_dirty = true;
            return Ok(());
        }
        self.slots.apply_layout(&self.options.layout, self.viewport);
        self.present();
        Ok(())
    }

    /// Re-derive the live side count from the options and image count.
    ///
    /// While maximized only the saved count is clamped to the image list;
    /// the requested count takes effect after the next restore.
    pub(super) fn refresh_side_count(&mut self) {
        let image_count = self.state.image_count();
        let requested = self.options.layout.side_image_count;
        if self.state.is_maximized() {
            self.state.saved_side_count =
                fix_side_count(self.state.saved_side_count, image_count);
        } else {
            self.state.active_side_count = fix_side_count(requested, image_count);
        }
        if !self.sized {
            self.viewport = Viewport::default_for(requested);
        }
    }

    /// URLs whose dimensions the host should resolve.
    pub fn take_image_requests(&mut self) -> Vec<String> {
        self.dimensions.take_requests()
    }

    /// Report the outcome of resolving `url`.
    ///
    /// A failure leaves the dimensions unknown: the slot keeps its loading
    /// state and the maximize guard is skipped for it. Results may arrive at
    /// any time; visible slots showing `url` are re-presented.
    pub fn image_resolved(
        &mut self,
        url: &str,
        result: Result<Dimensions, ResolutionFailure>,
    ) {
        if !self.attached {
            return;
        }
        let changed = self.dimensions.complete(url, result);
        if changed && self.slots.slots().iter().any(|slot| slot.url == url) {
            self.present();
        }
    }
}
