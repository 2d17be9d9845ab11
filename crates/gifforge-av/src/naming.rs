//! File naming shared by the staging area, the frame extractor and the
//! conversion strategies.
//!
//! Every path a tool reads or writes inside a staging directory is derived
//! from these constants, so the extractor and the encoders never disagree on
//! a filename.

/// Name of the staged input file.
pub const INPUT_FILE: &str = "in.gif";

/// printf-style pattern understood by both `convert` and `ffmpeg`.
pub const FRAME_PATTERN: &str = "frame_%05d.png";

/// Prefix and suffix of a single extracted frame.
const FRAME_PREFIX: &str = "frame_";
const FRAME_SUFFIX: &str = ".png";
const FRAME_DIGITS: usize = 5;

/// Index of the first extracted frame.
pub const FIRST_FRAME_INDEX: u32 = 1;

/// Output of the MP4 strategies.
pub const MP4_OUTPUT: &str = "out.mp4";

/// Output of the OGV strategy.
pub const OGV_OUTPUT: &str = "out.ogv";

/// File name of the frame with the given index.
pub fn frame_file(index: u32) -> String {
    format!("{FRAME_PREFIX}{index:0width$}{FRAME_SUFFIX}", width = FRAME_DIGITS)
}

/// Parse the index out of a frame file name, if it is one.
pub fn parse_frame_index(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(FRAME_PREFIX)?.strip_suffix(FRAME_SUFFIX)?;
    if digits.len() < FRAME_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
