//! Shared helpers for integration tests.

#![allow(dead_code)]

use image::codecs::gif::GifEncoder;
use image::{Frame, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write an animated GIF with `frames` frames to `dir/name`.
pub fn write_gif(dir: &Path, name: &str, width: u32, height: u32, frames: usize) -> PathBuf {
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        let frames = (0..frames).map(|i| {
            let red = (i * 60 % 256) as u8;
            Frame::new(RgbaImage::from_pixel(width, height, Rgba([red, 128, 0, 255])))
        });
        encoder.encode_frames(frames).unwrap();
    }

    let path = dir.join(name);
    std::fs::write(&path, buf).unwrap();
    path
}

/// Whether both external tools are on PATH.
pub fn tools_available() -> bool {
    which::which("ffmpeg").is_ok() && which::which("convert").is_ok()
}
