//! The window of currently visible slots.
//!
//! A [`SlotRegistry`] owns one slot per visible image plus an invisible
//! sentinel at each edge. The array is rebuilt from scratch whenever the
//! visible window changes; animations only ever touch the current-geometry
//! and fade fields of the array that is live between a render and the next
//! settle.

use crate::carousel::CarouselState;
use crate::layout::{self, SlotGeometry, Viewport};
use crate::options::LayoutOptions;

/// Linear interpolation between two pixel values, rounded to whole pixels.
#[inline]
#[must_use]
pub fn lerp_px(start: i32, end: i32, t: f32) -> i32 {
    start + ((end - start) as f32 * t).round() as i32
}

/// Interpolation endpoints for a slot targeted by an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAnimation {
    /// Width when the animation started.
    pub start_width: i32,
    /// Width when the animation ends.
    pub end_width: i32,
    /// Horizontal position when the animation started.
    pub start_x: i32,
    /// Horizontal position when the animation ends.
    pub end_x: i32,
}

impl SlotAnimation {
    /// Endpoints moving a slot from `from` to `to`.
    #[must_use]
    pub fn between(from: SlotGeometry, to: SlotGeometry) -> Self {
        Self {
            start_width: from.width,
            end_width: to.width,
            start_x: from.x,
            end_x: to.x,
        }
    }

    /// `(width, x)` at eased progress `t`; exactly the end values at `t >= 1`.
    #[must_use]
    pub fn sample(&self, t: f32) -> (i32, i32) {
        if t >= 1.0 {
            return (self.end_width, self.end_x);
        }
        (
            lerp_px(self.start_width, self.end_width, t),
            lerp_px(self.start_x, self.end_x, t),
        )
    }
}

/// One entry of the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSlot {
    /// Index within the slot array (0 = left sentinel).
    pub position: usize,
    /// Index of the displayed image in the full image list.
    pub source_index: usize,
    /// URL of the displayed image.
    pub url: String,
    /// Whether this is the middle slot of the window.
    pub is_center: bool,
    /// Whether this is one of the two invisible edge slots.
    pub is_sentinel: bool,
    /// Whether the sink should draw this slot at all.
    pub visible: bool,
    /// Current rendered geometry.
    pub geometry: SlotGeometry,
    /// Fade multiplier driven by maximize/restore (1 = fully shown).
    pub fade: f32,
    /// Endpoints while an animation targets this slot.
    pub animation: Option<SlotAnimation>,
}

impl VisibleSlot {
    /// Write the sampled animation endpoints into the current geometry.
    ///
    /// Slots without endpoints are left untouched.
    pub fn advance(&mut self, t: f32) {
        if let Some(anim) = self.animation {
            let (width, x) = anim.sample(t);
            self.geometry.width = width;
            self.geometry.x = x;
        }
    }
}

/// Owns the live slot array.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    slots: Vec<VisibleSlot>,
}

impl SlotRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the slot array for `state`, replacing the previous one.
    ///
    /// The window starts `active_side_count + 1` images left of the center
    /// index (sentinel included) and wraps around the image list. Geometry
    /// is computed immediately so every slot has a defined position.
    pub fn render(
        &mut self,
        state: &CarouselState,
        layout_opts: &LayoutOptions,
        viewport: Viewport,
    ) {
        self.slots.clear();
        let image_count = state.image_count();
        if image_count == 0 {
            return;
        }

        let count = layout::visible_count(state.active_side_count);
        let center = layout::center_slot(count);
        let mut source = (state.center_index + image_count
            - state.active_side_count % image_count)
            % image_count;

        self.slots.reserve(count);
        for position in 0..count {
            let is_sentinel = position == 0 || position == count - 1;
            self.slots.push(VisibleSlot {
                position,
                source_index: source,
                url: state.urls[source].clone(),
                is_center: position == center,
                is_sentinel,
                visible: !is_sentinel,
                geometry: SlotGeometry::default(),
                fade: 1.0,
                animation: None,
            });
            source = (source + 1) % image_count;
        }

        self.apply_layout(layout_opts, viewport);
    }

    /// Recompute geometry for the existing slots without rebuilding them.
    pub fn apply_layout(&mut self, layout_opts: &LayoutOptions, viewport: Viewport) {
        let geometry =
            layout::compute_layout(self.slots.len(), viewport, layout_opts);
        for (slot, geometry) in self.slots.iter_mut().zip(geometry) {
            slot.geometry = geometry;
        }
    }

    /// Drop all slots (no images to show).
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// The live slot array.
    #[must_use]
    pub fn slots(&self) -> &[VisibleSlot] {
        &self.slots
    }

    /// Mutable access for the animation driver.
    pub(crate) fn slots_mut(&mut self) -> &mut [VisibleSlot] {
        &mut self.slots
    }

    /// Number of slots, sentinels included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Position of the center slot, if any slots exist.
    #[must_use]
    pub fn center_position(&self) -> Option<usize> {
        (!self.slots.is_empty()).then(|| layout::center_slot(self.slots.len()))
    }

    /// The center slot, if any slots exist.
    #[must_use]
    pub fn center(&self) -> Option<&VisibleSlot> {
        self.center_position().and_then(|i| self.slots.get(i))
    }

    /// Source indices in slot order.
    #[must_use]
    pub fn source_indices(&self) -> Vec<usize> {
        self.slots.iter().map(|s| s.source_index).collect()
    }
}
