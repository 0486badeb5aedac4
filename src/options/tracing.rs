use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Tracing", inline)]
#[serde(default)]
/// Path tracing quality parameters.
pub struct TracingOptions {
    /// Maximum bounces per ray.
    #[schemars(title = "Max Bounces", range(min = 1, max = 200), extend("step" = 1))]
    pub max_bounces: u32,
    /// Samples traced per pixel per frame.
    #[schemars(title = "Samples per Pixel", range(min = 1, max = 200), extend("step" = 1))]
    pub samples_per_pixel: u32,
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            max_bounces: 1,
            samples_per_pixel: 1,
        }
    }
}
