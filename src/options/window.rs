use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Window creation parameters. Not exposed in the debug UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct WindowOptions {
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    /// Base window title; frame timing is appended at runtime.
    pub title: String,
    /// Present with vertical sync.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            title: "Refraction".to_owned(),
            vsync: false,
        }
    }
}
