//! The presentation boundary.
//!
//! The carousel never touches a rendering technology directly. After every
//! render, frame and settle it describes each slot as a [`SlotVisual`] and
//! hands it to a [`VisualSink`], which is free to move a DOM node, update a
//! GPU instance or print a line of text.

use crate::layout::ImagePlacement;

/// Everything a sink needs to draw one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotVisual<'a> {
    /// Index within the slot array.
    pub position: usize,
    /// Index of the image in the full list.
    pub source_index: usize,
    /// Image URL.
    pub url: &'a str,
    /// Left edge in viewport pixels.
    pub x: i32,
    /// Slot width.
    pub width: i32,
    /// Slot height.
    pub height: i32,
    /// Final opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether the slot is drawn at all.
    pub visible: bool,
    /// Whether this is the center slot.
    pub is_center: bool,
    /// Image placement inside the slot; `None` while dimensions are unknown.
    pub image: Option<ImagePlacement>,
}

/// Receives slot updates from the carousel.
pub trait VisualSink {
    /// A new slot array of `slot_count` entries replaces the previous one.
    fn begin_window(&mut self, slot_count: usize) {
        let _ = slot_count;
    }

    /// Draw (or move) one slot.
    fn present(&mut self, visual: &SlotVisual<'_>);

    /// Remove everything (the image list became empty).
    fn clear(&mut self) {}
}

/// Sink that discards every update, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn present(&mut self, _visual: &SlotVisual<'_>) {}
}

/// Owned copy of a [`SlotVisual`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedVisual {
    /// Index within the slot array.
    pub position: usize,
    /// Index of the image in the full list.
    pub source_index: usize,
    /// Image URL.
    pub url: String,
    /// Left edge in viewport pixels.
    pub x: i32,
    /// Slot width.
    pub width: i32,
    /// Slot height.
    pub height: i32,
    /// Final opacity.
    pub opacity: f32,
    /// Whether the slot is drawn.
    pub visible: bool,
    /// Whether this is the center slot.
    pub is_center: bool,
    /// Image placement inside the slot.
    pub image: Option<ImagePlacement>,
}

impl From<&SlotVisual<'_>> for RecordedVisual {
    fn from(v: &SlotVisual<'_>) -> Self {
        Self {
            position: v.position,
            source_index: v.source_index,
            url: v.url.to_owned(),
            x: v.x,
            width: v.width,
            height: v.height,
            opacity: v.opacity,
            visible: v.visible,
            is_center: v.is_center,
            image: v.image,
        }
    }
}

/// Sink that keeps the latest state of every slot plus simple counters.
///
/// Handy for tests and for hosts that prefer to pull state once per frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Latest visual per slot position.
    pub slots: Vec<Option<RecordedVisual>>,
    /// Number of `begin_window` calls.
    pub windows: usize,
    /// Number of `present` calls.
    pub presents: usize,
    /// Number of `clear` calls.
    pub clears: usize,
}

impl RecordingSink {
    /// The latest visual at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&RecordedVisual> {
        self.slots.get(position).and_then(Option::as_ref)
    }
}

impl VisualSink for RecordingSink {
    fn begin_window(&mut self, slot_count: usize) {
        self.windows += 1;
        self.slots.clear();
        self.slots.resize(slot_count, None);
    }

    fn present(&mut self, visual: &SlotVisual<'_>) {
        self.presents += 1;
        if self.slots.len() <= visual.position {
            self.slots.resize(visual.position + 1, None);
        }
        self.slots[visual.position] = Some(RecordedVisual::from(visual));
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.slots.clear();
    }
}
