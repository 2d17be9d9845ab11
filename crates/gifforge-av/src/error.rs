//! Error types for gifforge-av.

use std::fmt;
use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Image axis a dimension limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors that can occur while converting an animated image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image exceeds a configured dimension limit.
    #[error("image {axis} too large: {actual} > {limit}")]
    Dimension { axis: Axis, actual: u32, limit: u32 },

    /// The image header could not be parsed.
    #[error("failed to decode image header: {0}")]
    Decode(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external tool exited non-zero or could not be launched.
    #[error("tool execution failed: {tool} (exit code {}): {}", fmt_exit_code(.exit_code), .stderr.trim())]
    Tool {
        tool: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// A tool reported success but the expected artifact is absent.
    #[error("expected output was not produced: {}", path.display())]
    MissingOutput { path: PathBuf },

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse classification of an [`Error`], used by entry points to pick a
/// response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Dimension,
    Decode,
    Io,
    Tool,
    Other,
}

fn fmt_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl Error {
    /// Create a tool execution failed error.
    pub fn tool_failed(
        tool: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Tool {
            tool: tool.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a missing output error.
    pub fn missing_output(path: impl Into<PathBuf>) -> Self {
        Self::MissingOutput { path: path.into() }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Dimension { .. } => ErrorKind::Dimension,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
            Error::Tool { .. } | Error::ToolNotFound { .. } | Error::MissingOutput { .. } => {
                ErrorKind::Tool
            }
            Error::InvalidInput(_) => ErrorKind::Other,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) if e.kind() != std::io::ErrorKind::UnexpectedEof => {
                Error::Io(e)
            }
            other => Error::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_display() {
        let err = Error::Dimension {
            axis: Axis::Width,
            actual: 640,
            limit: 320,
        };
        assert_eq!(err.to_string(), "image width too large: 640 > 320");
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn tool_error_display_trims_stderr() {
        let err = Error::tool_failed("ffmpeg", Some(1), "  bad input\n");
        assert_eq!(
            err.to_string(),
            "tool execution failed: ffmpeg (exit code 1): bad input"
        );

        let err = Error::tool_failed("convert", None, "No such file or directory");
        assert!(err.to_string().contains("exit code none"));
    }

    #[test]
    fn error_kinds() {
        assert_eq!(Error::Decode("x".into()).kind(), ErrorKind::Decode);
        assert_eq!(
            Error::from(std::io::Error::other("disk")).kind(),
            ErrorKind::Io
        );
        assert_eq!(Error::tool_not_found("ffmpeg").kind(), ErrorKind::Tool);
        assert_eq!(Error::missing_output("/tmp/x").kind(), ErrorKind::Tool);
        assert_eq!(Error::InvalidInput("x".into()).kind(), ErrorKind::Other);
    }

    #[test]
    fn truncated_header_is_decode_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = Error::from(image::ImageError::IoError(io));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
