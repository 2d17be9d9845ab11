//! Video encodes through ffmpeg.

use super::ensure_output;
use crate::command::{ToolCommand, ToolRunner};
use crate::frames::extract_frames;
use crate::naming::{self, FIRST_FRAME_INDEX, FRAME_PATTERN, MP4_OUTPUT, OGV_OUTPUT};
use crate::staging::StagingDir;
use crate::tools::FFMPEG;
use crate::Result;
use std::path::{Path, PathBuf};

/// Truncates each dimension to an even value. H.264 with yuv420p rejects odd
/// widths and heights, so every MP4 encode applies it.
pub const EVEN_DIMENSIONS_FILTER: &str = "scale=trunc(in_w/2)*2:trunc(in_h/2)*2";

fn ffmpeg_in(dir: &Path) -> ToolCommand {
    let mut cmd = ToolCommand::new(FFMPEG);
    cmd.current_dir(dir);
    cmd
}

/// Input arguments for the extracted frame sequence.
fn frame_input(cmd: &mut ToolCommand) {
    cmd.arg("-start_number")
        .arg(FIRST_FRAME_INDEX.to_string())
        .args(["-i", FRAME_PATTERN]);
}

/// `ffmpeg -i in.gif -movflags faststart -pix_fmt yuv420p -vf <even> out.mp4`
pub fn direct_mp4_command(dir: &Path) -> ToolCommand {
    let mut cmd = ffmpeg_in(dir);
    cmd.args([
        "-i",
        naming::INPUT_FILE,
        "-movflags",
        "faststart",
        "-pix_fmt",
        "yuv420p",
        "-vf",
        EVEN_DIMENSIONS_FILTER,
        MP4_OUTPUT,
    ]);
    cmd
}

/// `ffmpeg -start_number 1 -i frame_%05d.png -pix_fmt yuv420p -vf <even> out.mp4`
pub fn frames_mp4_command(dir: &Path) -> ToolCommand {
    let mut cmd = ffmpeg_in(dir);
    frame_input(&mut cmd);
    cmd.args(["-pix_fmt", "yuv420p", "-vf", EVEN_DIMENSIONS_FILTER, MP4_OUTPUT]);
    cmd
}

/// `ffmpeg -start_number 1 -i frame_%05d.png -q 5 -pix_fmt yuv420p out.ogv`
pub fn frames_ogv_command(dir: &Path) -> ToolCommand {
    let mut cmd = ffmpeg_in(dir);
    frame_input(&mut cmd);
    cmd.args(["-q", "5", "-pix_fmt", "yuv420p", OGV_OUTPUT]);
    cmd
}

fn encode<R: ToolRunner>(
    runner: &R,
    staging: &StagingDir,
    cmd: ToolCommand,
    output: &str,
) -> Result<PathBuf> {
    tracing::info!(dir = %staging.path().display(), output, "encoding");
    runner.run(&cmd)?;
    ensure_output(staging.file(output))
}

/// Encode the staged GIF straight to MP4.
pub fn direct_to_mp4<R: ToolRunner>(runner: &R, staging: &StagingDir) -> Result<PathBuf> {
    encode(runner, staging, direct_mp4_command(staging.path()), MP4_OUTPUT)
}

/// Extract frames, then encode them to MP4.
pub fn frames_to_mp4<R: ToolRunner>(runner: &R, staging: &StagingDir) -> Result<PathBuf> {
    extract_frames(runner, staging)?;
    encode(runner, staging, frames_mp4_command(staging.path()), MP4_OUTPUT)
}

/// Extract frames, then encode them to Ogg/Theora.
pub fn frames_to_ogv<R: ToolRunner>(runner: &R, staging: &StagingDir) -> Result<PathBuf> {
    extract_frames(runner, staging)?;
    encode(runner, staging, frames_ogv_command(staging.path()), OGV_OUTPUT)
}
