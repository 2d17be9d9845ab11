//! End-to-end conversion: validate, stage, run a strategy, publish.

use crate::command::ToolRunner;
use crate::publish::publish;
use crate::staging::{StagingDir, StagingOptions};
use crate::strategies::Strategy;
use crate::validate::{check_dimensions, DimensionLimits, Dimensions};
use crate::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A published conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Destination the artifact was copied to.
    pub path: PathBuf,
    /// Size of the artifact in bytes.
    pub bytes: u64,
    /// Strategy that produced it.
    pub strategy: Strategy,
}

/// Runs conversions with a fixed tool runner, limits and staging options.
///
/// A `Converter` holds no per-request state, so one instance can serve
/// concurrent requests; each conversion gets its own staging directory.
#[derive(Debug, Clone)]
pub struct Converter<R> {
    runner: R,
    limits: DimensionLimits,
    staging: StagingOptions,
}

impl<R: ToolRunner> Converter<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            limits: DimensionLimits::UNLIMITED,
            staging: StagingOptions::default(),
        }
    }

    /// Reject inputs larger than `limits`.
    pub fn with_limits(mut self, limits: DimensionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Create staging directories according to `options`.
    pub fn with_staging(mut self, options: StagingOptions) -> Self {
        self.staging = options;
        self
    }

    /// Stage `input`, run `strategy`, and copy the artifact to `dest`.
    ///
    /// The staging directory is removed before this returns, on success
    /// and on every error path. No dimension check is done here; use
    /// [`Converter::convert_file`] or [`check_dimensions`] on a separate
    /// handle first.
    #[tracing::instrument(skip(self, input, dest), fields(dest = %dest.display()))]
    pub fn convert<I: Read>(&self, input: I, strategy: Strategy, dest: &Path) -> Result<Published> {
        let staging = StagingDir::stage(input, &self.staging)?;
        let artifact = strategy.run(&self.runner, &staging)?;
        let bytes = publish(&artifact, dest)?;
        staging.cleanup();

        Ok(Published {
            path: dest.to_path_buf(),
            bytes,
            strategy,
        })
    }

    /// Validate a file's dimensions, then convert it.
    ///
    /// The header is read through its own file handle; staging opens the
    /// file again.
    pub fn convert_file(&self, input: &Path, strategy: Strategy, dest: &Path) -> Result<Published> {
        if !self.limits.is_unlimited() {
            self.check_file(input)?;
        }
        let file = File::open(input)?;
        self.convert(file, strategy, dest)
    }

    /// Check a file's declared dimensions against the configured limits.
    pub fn check_file(&self, input: &Path) -> Result<Dimensions> {
        let reader = BufReader::new(File::open(input)?);
        check_dimensions(reader, self.limits)
    }
}
