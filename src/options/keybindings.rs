use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `MoveLeft` → `["ArrowLeft", "ArrowUp"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveLeft, vec!["ArrowLeft".into(), "ArrowUp".into()]),
            (
                KeyAction::MoveRight,
                vec!["ArrowRight".into(), "ArrowDown".into()],
            ),
            (KeyAction::First, vec!["Home".into()]),
            (KeyAction::Last, vec!["End".into()]),
            (
                KeyAction::ToggleMaximize,
                vec!["Enter".into(), "Space".into()],
            ),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let key = key.into();
        for keys in self.bindings.values_mut() {
            keys.retain(|k| *k != key);
        }
        self.bindings.entry(action).or_default().push(key);
        self.rebuild_reverse_map();
    }
}
