//! External command execution for cache flushing

use crate::error::{Error, Result};
use crate::platform::{FilesystemOps, Platform};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Result of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Human readable exit status
    pub status: String,
    /// Combined stdout and stderr, trimmed
    pub output: String,
}

/// Looks up and runs external programs.
///
/// The flusher only talks to the system through this trait, which keeps
/// the candidate selection logic testable without touching real services.
pub trait CommandRunner {
    /// Resolve a program on the search path
    fn find(&self, program: &str) -> Option<PathBuf>;

    /// Run a program to completion, capturing its output. No stdin is piped.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs real processes, resolving programs through the platform filesystem ops
pub struct SystemRunner {
    filesystem: Box<dyn FilesystemOps>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            filesystem: Platform::filesystem(),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn find(&self, program: &str) -> Option<PathBuf> {
        match self.filesystem.find_command(program) {
            Ok(path) => path,
            Err(e) => {
                debug!("Lookup of {} failed: {}", program, e);
                None
            }
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command_line = display_command(program, args);
        let executable = self.find(program).unwrap_or_else(|| PathBuf::from(program));
        debug!("Running {}", command_line);

        let output = Command::new(&executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::Command {
                command: command_line.clone(),
                reason: format!("failed to execute: {}", e),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            output: combined.trim().to_string(),
        })
    }
}

/// Render a program and its arguments as a single line for messages
pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
