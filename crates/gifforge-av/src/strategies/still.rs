//! Still-image output.

use super::ensure_output;
use crate::command::ToolRunner;
use crate::frames::extract_frames;
use crate::staging::StagingDir;
use crate::Result;
use std::path::PathBuf;

/// Extract frames and return the first one.
///
/// All frames are extracted with the same arguments the video strategies
/// use, so the PNG is pixel-identical to the first frame they encode.
pub fn first_frame<R: ToolRunner>(runner: &R, staging: &StagingDir) -> Result<PathBuf> {
    let frames = extract_frames(runner, staging)?;
    tracing::debug!(frames = frames.count(), "keeping first frame");
    ensure_output(frames.first())
}
