use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Intermediate buffer the tracer can present instead of the final image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBuffer {
    /// Shaded output.
    #[default]
    Final,
    /// Surface normals as RGB.
    Normal,
    /// Hit distance.
    Distance,
    /// Object id of the first hit.
    Id,
    /// Number of traversal steps taken.
    StepCount,
}

impl DisplayBuffer {
    /// Index written into the camera uniform.
    #[must_use]
    pub fn as_index(self) -> u32 {
        match self {
            Self::Final => 0,
            Self::Normal => 1,
            Self::Distance => 2,
            Self::Id => 3,
            Self::StepCount => 4,
        }
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Final => "final",
            Self::Normal => "normal",
            Self::Distance => "distance",
            Self::Id => "id",
            Self::StepCount => "step count",
        })
    }
}

/// Debug visualization settings.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Buffer shown at startup.
    #[schemars(title = "Display Buffer")]
    pub display_buffer: DisplayBuffer,
}
