use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and control tuning.
pub struct CameraOptions {
    /// World-space start position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Start yaw in degrees. -90 looks down -Z.
    #[schemars(skip)]
    pub yaw: f32,
    /// Start pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Distance moved per frame per held direction.
    #[schemars(title = "Move Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Degrees of rotation per pixel of pointer offset.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Horizontal field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -5.0],
            yaw: -90.0,
            pitch: 0.0,
            speed: 1.0,
            sensitivity: 0.1,
            fov: 90.0,
        }
    }
}
