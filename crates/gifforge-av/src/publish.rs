//! Copying finished artifacts out of a staging directory.

use crate::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Copy `src` to `dest`, returning the number of bytes written.
///
/// The source is copied rather than moved so it stays valid for anyone
/// still reading it. The copy is written to a temporary file next to `dest`,
/// synced, then renamed over `dest`: a reader that opens `dest` afterwards
/// sees the whole file, and a failed publish leaves `dest` untouched.
pub fn publish(src: &Path, dest: &Path) -> Result<u64> {
    tracing::info!(src = %src.display(), dest = %dest.display(), "publishing artifact");

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut input = File::open(src)?;
    let mut output = NamedTempFile::new_in(dir)?;
    let bytes = io::copy(&mut input, &mut output)?;
    output.flush()?;
    output.as_file().sync_all()?;
    output.persist(dest).map_err(|e| e.error)?;

    tracing::debug!(dest = %dest.display(), bytes, "published artifact");
    Ok(bytes)
}
