//! Decomposition of an animated image into still frames.

use crate::command::{ToolCommand, ToolRunner};
use crate::naming::{self, FIRST_FRAME_INDEX, FRAME_PATTERN};
use crate::staging::StagingDir;
use crate::tools::CONVERT;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Frames written into a staging directory by [`extract_frames`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    dir: PathBuf,
    count: usize,
}

impl FrameSequence {
    /// Number of extracted frames.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Path of the frame with the given index.
    pub fn frame(&self, index: u32) -> PathBuf {
        self.dir.join(naming::frame_file(index))
    }

    /// Path of the first frame.
    pub fn first(&self) -> PathBuf {
        self.frame(FIRST_FRAME_INDEX)
    }
}

/// Build the decomposition command for a staging directory.
pub fn extract_command(dir: &Path) -> ToolCommand {
    let mut cmd = ToolCommand::new(CONVERT);
    cmd.args([
        "-coalesce",
        naming::INPUT_FILE,
        "-scene",
        "1",
        FRAME_PATTERN,
    ])
    .current_dir(dir);
    cmd
}

/// Split the staged input into `frame_00001.png`, `frame_00002.png`, ...
/// inside the staging directory.
///
/// `-coalesce` renders every frame at full canvas size, so each file is a
/// complete picture rather than a delta. The staged input is left as is.
///
/// # Errors
///
/// - [`Error::Tool`] if `convert` fails or cannot be launched.
/// - [`Error::MissingOutput`] if it exits successfully without writing the
///   first frame.
pub fn extract_frames<R: ToolRunner>(runner: &R, staging: &StagingDir) -> Result<FrameSequence> {
    tracing::info!(dir = %staging.path().display(), "extracting frames");

    runner.run(&extract_command(staging.path()))?;

    let count = count_frames(staging.path())?;
    let sequence = FrameSequence {
        dir: staging.path().to_path_buf(),
        count,
    };

    if count == 0 || !sequence.first().is_file() {
        return Err(Error::missing_output(sequence.first()));
    }

    tracing::debug!(dir = %staging.path().display(), frames = count, "extracted frames");
    Ok(sequence)
}

fn count_frames(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if naming::parse_frame_index(&entry.file_name().to_string_lossy()).is_some() {
            count += 1;
        }
    }
    Ok(count)
}
