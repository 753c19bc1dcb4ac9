use serde::{Deserialize, Serialize};

/// Carousel actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_left = ["ArrowLeft", "ArrowUp"]
/// toggle_maximize = ["Enter"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Slide one image to the left.
    MoveLeft,
    /// Slide one image to the right.
    MoveRight,
    /// Jump to the first image.
    First,
    /// Jump to the last image.
    Last,
    /// Click the center image (maximize / restore).
    ToggleMaximize,
}
