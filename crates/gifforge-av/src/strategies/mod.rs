//! Conversion strategies.
//!
//! Each [`Strategy`] maps a staged input to exactly one output artifact
//! inside the staging directory:
//! - [`Strategy::DirectMp4`] - encode the GIF straight to MP4
//! - [`Strategy::FramesMp4`] - extract frames, then encode them to MP4
//! - [`Strategy::FramesOgv`] - extract frames, then encode them to Ogg/Theora
//! - [`Strategy::FirstFrame`] - extract frames and keep the first one
//!
//! A failing tool is fatal for the invocation. There is no retry and no
//! fallback to another strategy.

mod still;
mod video;

use crate::command::ToolRunner;
use crate::staging::StagingDir;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use still::first_frame;
pub use video::{
    direct_mp4_command, direct_to_mp4, frames_mp4_command, frames_ogv_command, frames_to_mp4,
    frames_to_ogv, EVEN_DIMENSIONS_FILTER,
};

/// A named conversion pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Encode the staged GIF directly to MP4.
    #[default]
    DirectMp4,
    /// Encode extracted frames to MP4.
    FramesMp4,
    /// Encode extracted frames to OGV.
    FramesOgv,
    /// Keep only the first extracted frame as PNG.
    FirstFrame,
}

impl Strategy {
    /// All strategies, in a stable order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DirectMp4,
        Strategy::FramesMp4,
        Strategy::FramesOgv,
        Strategy::FirstFrame,
    ];

    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectMp4 => "mp4",
            Strategy::FramesMp4 => "frames-mp4",
            Strategy::FramesOgv => "ogv",
            Strategy::FirstFrame => "frame",
        }
    }

    /// File extension of the produced artifact.
    pub fn output_extension(&self) -> &'static str {
        match self {
            Strategy::DirectMp4 | Strategy::FramesMp4 => "mp4",
            Strategy::FramesOgv => "ogv",
            Strategy::FirstFrame => "png",
        }
    }

    /// Run the strategy against a staged input, returning the artifact path.
    ///
    /// On success the returned path is an existing file inside `staging`.
    pub fn run<R: ToolRunner>(&self, runner: &R, staging: &StagingDir) -> Result<PathBuf> {
        tracing::info!(strategy = %self, dir = %staging.path().display(), "running strategy");
        match self {
            Strategy::DirectMp4 => direct_to_mp4(runner, staging),
            Strategy::FramesMp4 => frames_to_mp4(runner, staging),
            Strategy::FramesOgv => frames_to_ogv(runner, staging),
            Strategy::FirstFrame => first_frame(runner, staging),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mp4" | "direct-mp4" => Ok(Strategy::DirectMp4),
            "frames-mp4" => Ok(Strategy::FramesMp4),
            "ogv" | "frames-ogv" => Ok(Strategy::FramesOgv),
            "frame" | "first-frame" | "png" => Ok(Strategy::FirstFrame),
            _ => Err(Error::InvalidInput(format!("unknown strategy: {s}"))),
        }
    }
}

/// Fail with [`Error::MissingOutput`] unless `path` is a non-empty file.
pub(crate) fn ensure_output(path: PathBuf) -> Result<PathBuf> {
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(path),
        _ => Err(Error::missing_output(path)),
    }
}
