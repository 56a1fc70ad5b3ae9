//! Single execution primitive for external commands.
//!
//! Every tmux invocation funnels through [`CommandRunner`], giving one place
//! to add dry-run mode or timeouts later, and letting tests record the exact
//! command sequence the orchestrator issues.

pub mod errors;
#[cfg(test)]
pub(crate) mod testing;

use std::process::{Command, Stdio};

use tracing::debug;

pub use errors::ProcessError;

/// Synchronous external command execution.
pub trait CommandRunner {
    /// Whether `program` is reachable. Production resolves through PATH.
    fn is_installed(&self, program: &str) -> bool;

    /// Run to completion, capturing output. Non-zero exit is an error
    /// carrying the captured stderr text.
    fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError>;

    /// Run to completion, returning trimmed stdout.
    fn capture(&self, program: &str, args: &[String]) -> Result<String, ProcessError>;

    /// Run inheriting the caller's stdio. Used for the blocking attach and
    /// editor launches; blocks until the child exits.
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<(), ProcessError>;
}

/// Extract stderr from command output as a trimmed UTF-8 string.
pub fn stderr_lossy(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// The production [`CommandRunner`], backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn output(&self, program: &str, args: &[String]) -> Result<std::process::Output, ProcessError> {
        debug!(event = "core.process.run", program = program, args = ?args);
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.to_string(),
                source: e,
            })
    }

    fn check_status(
        program: &str,
        output: &std::process::Output,
    ) -> Result<(), ProcessError> {
        if output.status.success() {
            return Ok(());
        }
        Err(ProcessError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr: stderr_lossy(output),
        })
    }
}

impl CommandRunner for ProcessRunner {
    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        let output = self.output(program, args)?;
        Self::check_status(program, &output)
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String, ProcessError> {
        let output = self.output(program, args)?;
        Self::check_status(program, &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_interactive(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        debug!(event = "core.process.run_interactive", program = program, args = ?args);
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.to_string(),
                source: e,
            })?;
        if status.success() {
            return Ok(());
        }
        Err(ProcessError::CommandFailed {
            program: program.to_string(),
            code: status.code(),
            stderr: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let runner = ProcessRunner;
        runner.run("true", &[]).unwrap();
    }

    #[test]
    fn test_run_nonzero_exit_is_command_failed() {
        let runner = ProcessRunner;
        let err = runner.run("false", &[]).unwrap_err();
        match err {
            ProcessError::CommandFailed { program, code, .. } => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_missing_binary_is_spawn_failed() {
        let runner = ProcessRunner;
        let err = runner
            .run("rmux-test-no-such-binary-a1b2c3", &[])
            .unwrap_err();
        assert!(matches!(err, ProcessError::SpawnFailed { .. }));
    }

    #[test]
    fn test_capture_trims_stdout() {
        let runner = ProcessRunner;
        let out = runner
            .capture("echo", &["  hello  ".to_string()])
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_command_failed_carries_stderr() {
        let runner = ProcessRunner;
        let err = runner
            .run("sh", &["-c".to_string(), "echo boom >&2; exit 3".to_string()])
            .unwrap_err();
        match err {
            ProcessError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
