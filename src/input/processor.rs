//! Converts raw host events into carousel commands.
//!
//! The `InputProcessor` owns the key-binding map and the hover tracking.
//! It is the only thing that sits between raw host events and the
//! carousel's [`execute`](crate::Carousel::execute) method.

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::carousel::{Carousel, CarouselCommand, Direction};
use crate::options::KeybindingOptions;
use crate::sink::VisualSink;

/// The bits of carousel state that affect input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// Whether a transition is in flight (wheel input is dropped).
    pub animating: bool,
    /// Position of the center slot, if anything is rendered.
    pub center_slot: Option<usize>,
}

impl InputContext {
    /// Snapshot the relevant state of `carousel`.
    #[must_use]
    pub fn of<S: VisualSink>(carousel: &Carousel<S>) -> Self {
        Self {
            animating: carousel.is_animating(),
            center_slot: carousel.slots().center_position(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw host events into [`CarouselCommand`]s.
///
/// # Usage
///
/// ```ignore
/// let ctx = InputContext::of(&carousel);
/// if let Some(cmd) = input.handle_key_press("ArrowLeft", ctx) {
///     carousel.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Slot currently under the pointer.
    hovered: Option<usize>,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            hovered: None,
        }
    }

    /// Current key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable key bindings.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Slot currently under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Map a key string (e.g. `"ArrowLeft"`, `"Home"`) to a command.
    #[must_use]
    pub fn handle_key_press(
        &self,
        key: &str,
        ctx: InputContext,
    ) -> Option<CarouselCommand> {
        let action = self.key_bindings.lookup(key)?;
        match action {
            KeyAction::MoveLeft => Some(CarouselCommand::Move(Direction::Left)),
            KeyAction::MoveRight => Some(CarouselCommand::Move(Direction::Right)),
            KeyAction::First => Some(CarouselCommand::KeyHome),
            KeyAction::Last => Some(CarouselCommand::KeyEnd),
            KeyAction::ToggleMaximize => ctx
                .center_slot
                .map(|slot| CarouselCommand::Click { slot }),
        }
    }

    /// Process a pointer or wheel event.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        ctx: InputContext,
    ) -> Option<CarouselCommand> {
        match event {
            InputEvent::Wheel { delta } => {
                if ctx.animating || delta == 0.0 {
                    return None;
                }
                let direction = if delta < 0.0 {
                    Direction::Left
                } else {
                    Direction::Right
                };
                Some(CarouselCommand::Move(direction))
            }
            InputEvent::SlotClicked { position } => {
                Some(CarouselCommand::Click { slot: position })
            }
            InputEvent::PointerEntered { position } => {
                self.hovered = Some(position);
                Some(CarouselCommand::Hover(self.hovered))
            }
            InputEvent::PointerLeft { position } => {
                if self.hovered != Some(position) {
                    return None;
                }
                self.hovered = None;
                Some(CarouselCommand::Hover(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> InputContext {
        InputContext {
            animating: false,
            center_slot: Some(3),
        }
    }

    #[test]
    fn test_default_key_mapping() {
        let input = InputProcessor::new();
        let ctx = idle();
        assert_eq!(
            input.handle_key_press("ArrowUp", ctx),
            Some(CarouselCommand::Move(Direction::Left))
        );
        assert_eq!(
            input.handle_key_press("ArrowDown", ctx),
            Some(CarouselCommand::Move(Direction::Right))
        );
        assert_eq!(input.handle_key_press("Home", ctx), Some(CarouselCommand::KeyHome));
        assert_eq!(input.handle_key_press("End", ctx), Some(CarouselCommand::KeyEnd));
        assert_eq!(
            input.handle_key_press("Enter", ctx),
            Some(CarouselCommand::Click { slot: 3 })
        );
        assert_eq!(input.handle_key_press("KeyA", ctx), None);
    }

    #[test]
    fn test_toggle_key_without_slots_is_dropped() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("Space", InputContext::default()), None);
    }

    #[test]
    fn test_custom_bindings() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind("KeyH", KeyAction::MoveLeft);
        let input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            input.handle_key_press("KeyH", idle()),
            Some(CarouselCommand::Move(Direction::Left))
        );
    }

    #[test]
    fn test_wheel_direction_and_animation_gate() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Wheel { delta: -3.0 }, idle()),
            Some(CarouselCommand::Move(Direction::Left))
        );
        assert_eq!(
            input.handle_event(InputEvent::Wheel { delta: 1.5 }, idle()),
            Some(CarouselCommand::Move(Direction::Right))
        );
        assert_eq!(input.handle_event(InputEvent::Wheel { delta: 0.0 }, idle()), None);

        let busy = InputContext {
            animating: true,
            ..idle()
        };
        assert_eq!(input.handle_event(InputEvent::Wheel { delta: 1.0 }, busy), None);
    }

    #[test]
    fn test_hover_tracking() {
        let mut input = InputProcessor::new();
        let ctx = idle();
        assert_eq!(
            input.handle_event(InputEvent::PointerEntered { position: 2 }, ctx),
            Some(CarouselCommand::Hover(Some(2)))
        );
        assert_eq!(
            input.handle_event(InputEvent::PointerEntered { position: 4 }, ctx),
            Some(CarouselCommand::Hover(Some(4)))
        );
        // stale leave from the previous slot
        assert_eq!(input.handle_event(InputEvent::PointerLeft { position: 2 }, ctx), None);
        assert_eq!(
            input.handle_event(InputEvent::PointerLeft { position: 4 }, ctx),
            Some(CarouselCommand::Hover(None))
        );
        assert_eq!(input.hovered(), None);
    }

    #[test]
    fn test_click_passes_through() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::SlotClicked { position: 1 }, idle()),
            Some(CarouselCommand::Click { slot: 1 })
        );
    }

    #[test]
    fn test_context_from_carousel() {
        use crate::options::Options;
        use crate::sink::NullSink;

        let mut carousel = Carousel::new(NullSink, Options::default()).unwrap();
        assert_eq!(InputContext::of(&carousel), InputContext::default());

        carousel
            .set_images((0..9).map(|i| format!("{i}.png")).collect())
            .unwrap();
        let ctx = InputContext::of(&carousel);
        assert_eq!(ctx.center_slot, Some(3));

        let input = InputProcessor::new();
        let cmd = input.handle_key_press("ArrowRight", ctx).unwrap();
        carousel.execute(cmd).unwrap();
        assert!(InputContext::of(&carousel).animating);
    }
}
