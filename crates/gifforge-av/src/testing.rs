//! Fake tool runners for unit tests.

use crate::command::{ToolCommand, ToolOutput, ToolRunner};
use crate::tools::{CONVERT, FFMPEG};
use crate::{naming, Error, Result};
use std::sync::Mutex;

/// Records every command and writes the files the real tools would write.
///
/// `convert` produces `frames` frame files; `ffmpeg` writes a small payload to
/// its last argument.
pub(crate) struct RecordingRunner {
    frames: u32,
    commands: Mutex<Vec<ToolCommand>>,
}

impl RecordingRunner {
    pub(crate) fn with_frames(frames: u32) -> Self {
        Self {
            frames,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn commands(&self) -> Vec<ToolCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput> {
        self.commands.lock().unwrap().push(cmd.clone());
        let dir = cmd.get_current_dir().expect("tools run inside the staging directory");

        match cmd.program() {
            CONVERT => {
                for index in 1..=self.frames {
                    std::fs::write(dir.join(naming::frame_file(index)), format!("frame {index}"))?;
                }
            }
            FFMPEG => {
                let output = cmd.get_args().last().expect("ffmpeg needs an output");
                std::fs::write(dir.join(output), b"\x00\x00\x00\x18ftypisom")?;
            }
            other => panic!("unexpected tool {other}"),
        }

        Ok(ToolOutput {
            status_code: Some(0),
            ..ToolOutput::default()
        })
    }
}

/// Fails every invocation with a fixed exit code.
pub(crate) struct FailingRunner {
    exit_code: i32,
    stderr: String,
}

impl FailingRunner {
    pub(crate) fn new(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code,
            stderr: stderr.to_string(),
        }
    }
}

impl ToolRunner for FailingRunner {
    fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput> {
        Err(Error::tool_failed(
            cmd.program(),
            Some(self.exit_code),
            self.stderr.clone(),
        ))
    }
}
