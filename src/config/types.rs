use gifforge_av::{DimensionLimits, StagingOptions, ToolsConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Maximum accepted input size; 0 disables a limit.
    #[serde(default)]
    pub limits: DimensionLimits,

    /// Paths to ffmpeg and convert, if not on PATH.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Where staging directories are created.
    #[serde(default)]
    pub staging: StagingOptions,
}

impl Config {
    /// Apply command-line limit overrides.
    pub fn override_limits(&mut self, max_width: Option<u32>, max_height: Option<u32>) {
        if let Some(w) = max_width {
            self.limits.max_width = w;
        }
        if let Some(h) = max_height {
            self.limits.max_height = h;
        }
    }
}
