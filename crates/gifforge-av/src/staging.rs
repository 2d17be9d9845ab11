//! Staging directory management for conversion requests.
//!
//! A [`StagingDir`] is a temporary directory owned by exactly one conversion.
//! It holds the staged input ([`naming::INPUT_FILE`]) and whatever the
//! external tools write next to it. The directory is removed when the handle
//! is cleaned up or dropped, so every exit path releases it.

use crate::{naming, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Where and how staging directories are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingOptions {
    /// Parent directory for staging directories. Defaults to the system
    /// temp directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_root: Option<PathBuf>,
    /// Name prefix of each staging directory.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "gifforge".to_string()
}

impl Default for StagingOptions {
    fn default() -> Self {
        Self {
            temp_root: None,
            prefix: default_prefix(),
        }
    }
}

/// Exclusively-owned temporary directory for one conversion.
///
/// # Example
///
/// ```no_run
/// use gifforge_av::{StagingDir, StagingOptions};
///
/// let input = std::fs::File::open("/path/to/anim.gif")?;
/// let staging = StagingDir::stage(input, &StagingOptions::default())?;
/// println!("staged at {}", staging.input().display());
/// staging.cleanup();
/// # Ok::<(), gifforge_av::Error>(())
/// ```
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl StagingDir {
    /// Create an empty staging directory.
    pub fn create(options: &StagingOptions) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&options.prefix);

        let dir = match &options.temp_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        tracing::debug!(dir = %dir.path().display(), "created staging directory");

        Ok(Self {
            path: dir.path().to_path_buf(),
            dir: Some(dir),
        })
    }

    /// Create a staging directory and copy `reader` into its input file.
    ///
    /// If copying fails the directory is removed before the error is
    /// returned.
    pub fn stage<R: Read>(mut reader: R, options: &StagingOptions) -> Result<Self> {
        let staging = Self::create(options)?;
        let input = staging.input();

        let mut file = File::create(&input)?;
        let bytes = io::copy(&mut reader, &mut file)?;
        file.flush()?;
        file.sync_all()?;

        tracing::info!(dir = %staging.path().display(), bytes, "staged input");
        Ok(staging)
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the staged input file.
    pub fn input(&self) -> PathBuf {
        self.path.join(naming::INPUT_FILE)
    }

    /// Path of a named file inside the staging directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Remove the directory and everything in it.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };

        tracing::debug!(dir = %self.path.display(), "removing staging directory");
        if let Err(e) = dir.close() {
            tracing::warn!(dir = %self.path.display(), error = %e, "failed to remove staging directory");
        }
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        self.remove();
    }
}
