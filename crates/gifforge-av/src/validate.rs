//! Header-only dimension checks.

use crate::error::Axis;
use crate::{Error, Result};
use image::{ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Seek};

/// Maximum accepted image size. A limit of 0 disables the check for that
/// axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionLimits {
    #[serde(default)]
    pub max_width: u32,
    #[serde(default)]
    pub max_height: u32,
}

impl DimensionLimits {
    /// No limit on either axis.
    pub const UNLIMITED: Self = Self {
        max_width: 0,
        max_height: 0,
    };

    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Whether both axes are unlimited.
    pub fn is_unlimited(&self) -> bool {
        self.max_width == 0 && self.max_height == 0
    }

    /// Check already-known dimensions against these limits.
    pub fn check(&self, dims: Dimensions) -> Result<()> {
        check_axis(Axis::Width, dims.width, self.max_width)?;
        check_axis(Axis::Height, dims.height, self.max_height)
    }
}

fn check_axis(axis: Axis, actual: u32, limit: u32) -> Result<()> {
    if limit > 0 && actual > limit {
        return Err(Error::Dimension {
            axis,
            actual,
            limit,
        });
    }
    Ok(())
}

/// Declared size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Read the declared width and height from a GIF header.
///
/// Only the header is read; frame data is never decoded.
pub fn read_dimensions<R: BufRead + Seek>(reader: R) -> Result<Dimensions> {
    let (width, height) = ImageReader::with_format(reader, ImageFormat::Gif).into_dimensions()?;
    Ok(Dimensions { width, height })
}

/// Check a GIF stream's declared dimensions against `limits`.
///
/// The reader is consumed; stage the payload from a separate handle.
///
/// # Errors
///
/// - [`Error::Decode`] if the header is not a valid GIF header.
/// - [`Error::Dimension`] if an axis exceeds a non-zero limit. Width is
///   checked before height.
pub fn check_dimensions<R: BufRead + Seek>(reader: R, limits: DimensionLimits) -> Result<Dimensions> {
    let dims = read_dimensions(reader)?;
    limits.check(dims)?;
    Ok(dims)
}
