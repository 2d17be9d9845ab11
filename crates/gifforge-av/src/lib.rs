//! # gifforge-av
//!
//! Conversion of animated GIFs into video and still images by orchestrating
//! external tools (`convert` and `ffmpeg`).
//!
//! This crate provides:
//!
//! - **Validation** ([`check_dimensions`]) -- header-only width/height checks
//!   against optional limits.
//! - **Staging** ([`StagingDir`]) -- one temporary directory per conversion,
//!   removed on every exit path.
//! - **Tool execution** ([`ToolRunner`], [`ToolCommand`], [`ToolRegistry`]) --
//!   subprocess invocation behind a trait so tests can substitute a fake.
//! - **Frame extraction** ([`extract_frames`]) -- decomposition into
//!   `frame_00001.png`, `frame_00002.png`, ...
//! - **Strategies** ([`Strategy`]) -- direct MP4, frames to MP4, frames to
//!   OGV, and first frame only.
//! - **Publishing** ([`publish`]) -- copy an artifact out of staging.
//!
//! ## Example
//!
//! ```no_run
//! use gifforge_av::{Converter, DimensionLimits, Strategy, SystemRunner};
//! use std::path::Path;
//!
//! let converter = Converter::new(SystemRunner::new())
//!     .with_limits(DimensionLimits::new(1920, 1080));
//! let published = converter.convert_file(
//!     Path::new("/path/to/anim.gif"),
//!     Strategy::FramesMp4,
//!     Path::new("/srv/media/anim.mp4"),
//! )?;
//! println!("{} bytes", published.bytes);
//! # Ok::<(), gifforge_av::Error>(())
//! ```

pub mod command;
pub mod converter;
mod error;
pub mod frames;
pub mod naming;
pub mod publish;
pub mod staging;
pub mod strategies;
pub mod tools;
pub mod validate;

#[cfg(test)]
mod testing;

// ---- Re-exports for convenience ----

pub use command::{SystemRunner, ToolCommand, ToolOutput, ToolRunner};
pub use converter::{Converter, Published};
pub use error::{Axis, Error, ErrorKind, Result};
pub use frames::{extract_frames, FrameSequence};
pub use publish::publish;
pub use staging::{StagingDir, StagingOptions};
pub use strategies::Strategy;
pub use tools::{ToolInfo, ToolRegistry, ToolsConfig};
pub use validate::{check_dimensions, read_dimensions, DimensionLimits, Dimensions};
