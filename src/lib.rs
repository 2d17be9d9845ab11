//! gifforge - animated GIF conversion
//!
//! This library crate exposes configuration loading and error classification
//! for the binary and for integration testing.

pub mod config;

use gifforge_av::ErrorKind;
use std::path::{Path, PathBuf};

/// Process exit code for a failed command.
///
/// Conversion errors are classified by kind so scripts can tell a rejected
/// input from a broken toolchain. Anything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<gifforge_av::Error>())
        .map(gifforge_av::Error::kind);

    match kind {
        Some(ErrorKind::Dimension) => 2,
        Some(ErrorKind::Decode) => 3,
        Some(ErrorKind::Io) => 4,
        Some(ErrorKind::Tool) => 5,
        Some(ErrorKind::Other) | None => 1,
    }
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "gifforge=trace,gifforge_av=trace"
    } else {
        "gifforge=debug,gifforge_av=debug"
    }
}

/// Default destination for a conversion: the input path with the
/// strategy's extension.
pub fn default_output(input: &Path, strategy: gifforge_av::Strategy) -> PathBuf {
    input.with_extension(strategy.output_extension())
}
