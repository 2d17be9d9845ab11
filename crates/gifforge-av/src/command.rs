//! External tool invocation.
//!
//! Every subprocess goes through a [`ToolRunner`]. Production code uses
//! [`SystemRunner`]; tests substitute a runner that records the
//! [`ToolCommand`]s it receives.

use crate::tools::ToolRegistry;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output captured from a tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Exit code, if the process exited normally.
    pub status_code: Option<i32>,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A description of one external tool invocation.
///
/// # Example
///
/// ```
/// use gifforge_av::ToolCommand;
///
/// let mut cmd = ToolCommand::new("ffmpeg");
/// cmd.args(["-i", "in.gif", "out.mp4"]).current_dir("/tmp/staging");
/// assert_eq!(cmd.display(), "ffmpeg -i in.gif out.mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Create a new command for the given tool name.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<String>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Set the working directory of the process.
    pub fn current_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Render the command line for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs external tools.
///
/// Implementations must treat a non-zero exit status as an error and report
/// it as [`Error::Tool`] carrying the exit code and captured stderr. A
/// process that cannot be launched is reported the same way with no exit
/// code.
pub trait ToolRunner {
    fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput> {
        (**self).run(cmd)
    }
}

/// Runs tools as real subprocesses, blocking until they exit.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    registry: Option<ToolRegistry>,
}

impl SystemRunner {
    /// Runner that spawns programs by name, resolved through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that resolves programs through a discovered registry first.
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    fn resolve(&self, program: &str) -> PathBuf {
        self.registry
            .as_ref()
            .and_then(|r| r.get(program))
            .map(|cfg| cfg.path.clone())
            .unwrap_or_else(|| PathBuf::from(program))
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput> {
        let program = self.resolve(cmd.program());
        tracing::debug!(tool = cmd.program(), command = %cmd.display(), "running tool");

        let mut process = Command::new(&program);
        process
            .args(cmd.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cmd.get_current_dir() {
            process.current_dir(dir);
        }

        let output = process
            .output()
            .map_err(|e| Error::tool_failed(cmd.program(), None, format!("failed to spawn: {e}")))?;

        let tool_output = ToolOutput {
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            tracing::warn!(
                tool = cmd.program(),
                status = %output.status,
                "tool exited unsuccessfully"
            );
            return Err(Error::tool_failed(
                cmd.program(),
                tool_output.status_code,
                tool_output.stderr,
            ));
        }

        Ok(tool_output)
    }
}
