/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CarouselCommand`](crate::CarouselCommand) values.
/// Key presses go through
/// [`handle_key_press`](super::InputProcessor::handle_key_press) instead,
/// since they carry a key string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel turned (negative = up).
    Wheel {
        /// Scroll amount; only the sign matters.
        delta: f32,
    },
    /// A slot was clicked.
    SlotClicked {
        /// Position of the slot in the slot array.
        position: usize,
    },
    /// The pointer moved onto a slot.
    PointerEntered {
        /// Position of the slot in the slot array.
        position: usize,
    },
    /// The pointer moved off a slot.
    PointerLeft {
        /// Position of the slot in the slot array.
        position: usize,
    },
}
