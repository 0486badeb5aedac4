use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// A `[keybindings.bindings]` table in a preset replaces the whole map.
/// Each action takes a list of keys, e.g.
/// `move_forward = ["KeyW", "ArrowUp"]`.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `move_forward` → `["KeyW"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let keys = |names: &[&str]| -> Vec<String> {
            names.iter().map(|&name| name.to_owned()).collect()
        };
        let bindings = HashMap::from([
            (KeyAction::MoveForward, keys(&["KeyW", "ArrowUp"])),
            (KeyAction::MoveBackward, keys(&["KeyS", "ArrowDown"])),
            (KeyAction::MoveLeft, keys(&["KeyA", "ArrowLeft"])),
            (KeyAction::MoveRight, keys(&["KeyD", "ArrowRight"])),
            (KeyAction::MoveUp, keys(&["KeyE"])),
            (KeyAction::MoveDown, keys(&["KeyQ"])),
            (KeyAction::ShowFinal, keys(&["F1"])),
            (KeyAction::ShowNormal, keys(&["F2"])),
            (KeyAction::ShowDistance, keys(&["F3"])),
            (KeyAction::ShowId, keys(&["F4"])),
            (KeyAction::ShowStepCount, keys(&["F5"])),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.iter().any(|name| name == key))
            .map(|(action, _)| *action)
    }
}
