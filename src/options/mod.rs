//! Carousel configuration with TOML preset support.
//!
//! All tweakable settings (layout geometry, animation timing, mouse-over
//! highlighting, key bindings) are consolidated here. Options serialize
//! to/from TOML so a host can ship presets alongside its assets.

mod animation;
mod display;
mod keybindings;
mod layout;

use std::path::Path;

pub use animation::AnimationOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
pub(crate) use layout::{
    validate_center_relative_width, validate_side_image_count,
    validate_side_relative_width,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Strip geometry.
    pub layout: LayoutOptions,
    /// Transition timing.
    pub animation: AnimationOptions,
    /// Mouse-over highlighting.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every section against its accepted ranges.
    pub fn validate(&self) -> Result<(), CarouselError> {
        self.layout.validate()?;
        self.animation.validate()?;
        self.display.validate()
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CarouselError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content = std::fs::read_to_string(path).map_err(CarouselError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CarouselError::Io)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn test_default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
duration_ms = 450
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.animation.duration_ms, 450);
        assert!(opts.animation.enabled);
        assert_eq!(opts.layout.side_image_count, 2);
        assert_eq!(opts.layout.center_relative_width, 0.4);
        assert_eq!(opts.layout.padding_x, 3);
        assert_eq!(opts.layout.padding_y, 2);
    }

    #[test]
    fn test_out_of_range_toml_is_rejected() {
        let toml_str = r"
[layout]
side_relative_width = 0.95
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::Configuration {
                field: "side_relative_width",
                ..
            }
        ));
    }

    #[test]
    fn test_unbounded_easing_is_rejected() {
        let toml_str = r"
[animation]
easing = { cubic_hermite = { c1 = 2.0, c2 = 2.0 } }
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::Configuration {
                field: "easing",
                ..
            }
        ));

        let toml_str = r"
[animation]
easing = { cubic_hermite = { c1 = 0.25, c2 = 1.0 } }
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.animation.easing,
            crate::animation::EasingFunction::CubicHermite { c1: 0.25, c2: 1.0 }
        );
    }

    #[test]
    fn test_presets_save_load_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let presets = dir.path().join("presets");

        let mut opts = Options::default();
        opts.layout.side_image_count = 3;
        opts.animation.duration_ms = 350;
        opts.display.mouse_over_effects = true;
        opts.save(&presets.join("wide.toml")).unwrap();
        assert_eq!(Options::load(&presets.join("wide.toml")).unwrap(), opts);

        Options::default().save(&presets.join("compact.toml")).unwrap();
        std::fs::write(presets.join("notes.txt"), "not a preset").unwrap();
        assert_eq!(Options::list_presets(&presets), vec!["compact", "wide"]);

        assert!(Options::list_presets(&dir.path().join("missing")).is_empty());
        assert!(matches!(
            Options::load(&presets.join("missing.toml")),
            Err(CarouselError::Io(_))
        ));
    }

    #[test]
    fn test_validate_ranges() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());

        opts.layout.side_image_count = 0;
        assert!(opts.validate().is_err());
        opts.layout.side_image_count = 1;

        opts.layout.center_relative_width = 1.0;
        assert!(opts.validate().is_err());
        opts.layout.center_relative_width = 0.0;
        assert!(opts.validate().is_err());
        opts.layout.center_relative_width = f32::NAN;
        assert!(opts.validate().is_err());
        opts.layout.center_relative_width = 0.5;

        opts.layout.side_relative_width = 0.5;
        assert!(opts.validate().is_ok());
        opts.layout.side_relative_width = 0.8;
        assert!(opts.validate().is_ok());
        opts.layout.side_relative_width = 0.49;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::MoveLeft)
        );
        assert_eq!(opts.keybindings.lookup("ArrowUp"), Some(KeyAction::MoveLeft));
        assert_eq!(opts.keybindings.lookup("ArrowDown"), Some(KeyAction::MoveRight));
        assert_eq!(opts.keybindings.lookup("Home"), Some(KeyAction::First));
        assert_eq!(opts.keybindings.lookup("End"), Some(KeyAction::Last));
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::ToggleMaximize));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn test_rebinding_moves_key_between_actions() {
        let mut opts = Options::default();
        opts.keybindings.bind("Space", KeyAction::MoveRight);
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::MoveRight));
        assert_eq!(opts.keybindings.lookup("Enter"), Some(KeyAction::ToggleMaximize));
    }

    #[test]
    fn test_base_opacity() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.base_opacity(false, false, false), 1.0);

        display.mouse_over_effects = true;
        assert_eq!(display.base_opacity(false, false, false), 0.7);
        assert_eq!(display.base_opacity(true, false, false), 0.9);
        assert_eq!(display.base_opacity(false, true, false), 1.0);
        assert_eq!(display.base_opacity(false, false, true), 1.0);
    }

    #[test]
    fn test_schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("layout"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("keybindings"));

        let layout = &props["layout"]["properties"];
        assert!(layout.get("side_image_count").is_some());
        let center = &layout["center_relative_width"];
        assert_eq!(center["exclusiveMinimum"], 0.0);
        assert_eq!(center["exclusiveMaximum"], 1.0);
        assert!(center.get("minimum").is_none());
        let side = &layout["side_relative_width"];
        assert_eq!(side["minimum"], 0.5);
        assert_eq!(side["maximum"], 0.8);

        let animation = &props["animation"]["properties"];
        assert!(animation.get("duration_ms").is_some());
        assert!(animation.get("easing").is_none());
    }
}
