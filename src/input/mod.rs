//! Input handling: event types and the input processor that converts raw
//! host events into carousel commands.

/// Platform-agnostic input events.
pub mod event;
mod keyboard;
/// Converts raw events into carousel commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{InputContext, InputProcessor};
