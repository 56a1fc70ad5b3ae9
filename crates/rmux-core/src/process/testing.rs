//! Recording [`CommandRunner`] used by orchestrator tests.

use std::cell::RefCell;

use super::{CommandRunner, ProcessError};

/// Records every invocation and answers from a small script:
/// `session_exists` drives the `has-session` reply, `pane_base_index` the
/// `show -gv pane-base-index` reply, `fail_subcommand` makes one tmux
/// subcommand fail with a canned stderr, and `not_installed` fails the
/// preflight lookup.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Vec<String>>>,
    pub session_exists: bool,
    pub pane_base_index: Option<String>,
    pub fail_subcommand: Option<String>,
    pub not_installed: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_session() -> Self {
        Self {
            session_exists: true,
            ..Self::default()
        }
    }

    /// Recorded calls as `program subcommand args...` lines.
    pub fn recorded(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The subcommand (first argument) of every recorded call, in order.
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| call.get(1).cloned())
            .collect()
    }

    fn record(&self, program: &str, args: &[String]) {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);
    }

    fn respond(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        if subcommand == "has-session" && !self.session_exists {
            return Err(ProcessError::CommandFailed {
                program: program.to_string(),
                code: Some(1),
                stderr: "can't find session".to_string(),
            });
        }
        if Some(subcommand) == self.fail_subcommand.as_deref() {
            return Err(ProcessError::CommandFailed {
                program: program.to_string(),
                code: Some(1),
                stderr: format!("scripted failure for {}", subcommand),
            });
        }
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    fn is_installed(&self, _program: &str) -> bool {
        !self.not_installed
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        self.record(program, args);
        self.respond(program, args)
    }

    fn capture(&self, program: &str, args: &[String]) -> Result<String, ProcessError> {
        self.record(program, args);
        self.respond(program, args)?;
        if args.first().map(String::as_str) == Some("show") {
            return Ok(self.pane_base_index.clone().unwrap_or_default());
        }
        Ok(String::new())
    }

    fn run_interactive(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        self.record(program, args);
        self.respond(program, args)
    }
}
