use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::errors::{GitInfoError, Result};

/// Runs an external program to completion and captures its stdout.
///
/// Returns `Ok(Some(stdout))`, whitespace-trimmed, when the program exits
/// with code 0 and `Ok(None)` for any other exit code. Failing to launch the
/// program, or the program dying without an exit code, is an error.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        (**self).run(program, args)
    }
}

/// Runs programs as child processes of the current process.
///
/// There is no timeout: a child that never exits blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    work_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every program with `dir` as its working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null()).stderr(Stdio::inherit());
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("running {program} {}", args.join(" "));
        let output = cmd.output().map_err(|source| GitInfoError::Launch {
            program: program.to_string(),
            source,
        })?;

        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                Ok(Some(stdout.trim().to_string()))
            }
            Some(code) => {
                tracing::debug!("{program} exited with code {code}");
                Ok(None)
            }
            None => Err(GitInfoError::Terminated {
                program: program.to_string(),
            }),
        }
    }
}
