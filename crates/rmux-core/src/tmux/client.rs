//! Typed wrappers over the tmux subcommand surface.

use tracing::debug;

use crate::process::{CommandRunner, ProcessRunner};
use crate::tmux::errors::TmuxError;

/// Whether the current process is already running inside a tmux client.
///
/// tmux exports `$TMUX` to every pane; its presence means an attach would
/// nest clients, so the orchestrator switches instead.
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|v| !v.is_empty())
}

/// A tmux server driven through one executable, one subcommand at a time.
///
/// Generic over [`CommandRunner`] so tests can record the exact command
/// sequence; production code uses [`TmuxClient::new`].
#[derive(Debug)]
pub struct TmuxClient<R = ProcessRunner> {
    command: String,
    runner: R,
}

impl TmuxClient<ProcessRunner> {
    pub fn new(command: &str) -> Self {
        Self::with_runner(command, ProcessRunner)
    }
}

impl<R: CommandRunner> TmuxClient<R> {
    pub fn with_runner(command: &str, runner: R) -> Self {
        Self {
            command: command.to_string(),
            runner,
        }
    }

    /// The executable this client drives (`tmux` unless overridden).
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Preflight: verify the executable is reachable on PATH.
    pub fn check_installed(&self) -> Result<(), TmuxError> {
        if self.runner.is_installed(&self.command) {
            return Ok(());
        }
        debug!(event = "core.tmux.not_installed", command = %self.command);
        Err(TmuxError::NotInstalled {
            command: self.command.clone(),
        })
    }

    pub fn version(&self) -> Result<String, TmuxError> {
        Ok(self.capture(&["-V"])?)
    }

    /// Whether a session named `name` exists. Blank names never match.
    pub fn has_session(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.run(&["has-session", "-t", name]).is_ok()
    }

    /// Create a detached session, optionally seeding the first window's
    /// name and the initial working directory.
    pub fn new_session(
        &self,
        name: &str,
        first_window: Option<&str>,
        root: Option<&str>,
    ) -> Result<(), TmuxError> {
        let mut args = vec!["new-session", "-d", "-s", name];
        if let Some(window) = first_window {
            args.extend(["-n", window]);
        }
        if let Some(root) = root {
            args.extend(["-c", root]);
        }
        self.run(&args)
    }

    pub fn new_window(
        &self,
        session: &str,
        name: &str,
        root: Option<&str>,
    ) -> Result<(), TmuxError> {
        let mut args = vec!["new-window", "-t", session, "-n", name];
        if let Some(root) = root {
            args.extend(["-c", root]);
        }
        self.run(&args)
    }

    pub fn select_layout(&self, target: &str, layout: &str) -> Result<(), TmuxError> {
        self.run(&["select-layout", "-t", target, layout])
    }

    pub fn split_window_horizontal(&self, target: &str) -> Result<(), TmuxError> {
        self.run(&["split-window", "-t", target, "-h"])
    }

    /// Type `text` into the target pane and submit it with ENTER.
    /// Fire-and-forget: the invoked command's outcome is never inspected.
    pub fn send_keys(&self, target: &str, text: &str) -> Result<(), TmuxError> {
        self.run(&["send-keys", "-t", target, text, "C-m"])
    }

    pub fn select_window(&self, target: &str) -> Result<(), TmuxError> {
        self.run(&["select-window", "-t", target])
    }

    pub fn select_pane(&self, target: &str) -> Result<(), TmuxError> {
        self.run(&["select-pane", "-t", target])
    }

    /// The server's configured `pane-base-index`, defaulting to 0 when the
    /// option cannot be queried or parsed.
    pub fn pane_base_index(&self) -> i64 {
        match self.capture(&["show", "-gv", "pane-base-index"]) {
            Ok(value) => value.parse().unwrap_or(0),
            Err(e) => {
                debug!(event = "core.tmux.pane_base_index_unavailable", error = %e);
                0
            }
        }
    }

    /// Blocking attach that inherits the caller's stdio.
    pub fn attach_session(&self, session: &str) -> Result<(), TmuxError> {
        let args = to_owned_args(&["attach-session", "-t", session]);
        Ok(self.runner.run_interactive(&self.command, &args)?)
    }

    /// Redirect the already-attached client to `session` (non-blocking).
    pub fn switch_client(&self, session: &str) -> Result<(), TmuxError> {
        self.run(&["switch-client", "-t", session])
    }

    pub fn detach_client(&self) -> Result<(), TmuxError> {
        self.run(&["detach-client"])
    }

    pub fn kill_server(&self) -> Result<(), TmuxError> {
        self.run(&["kill-server"])
    }

    fn run(&self, args: &[&str]) -> Result<(), TmuxError> {
        Ok(self.runner.run(&self.command, &to_owned_args(args))?)
    }

    fn capture(&self, args: &[&str]) -> Result<String, TmuxError> {
        Ok(self.runner.capture(&self.command, &to_owned_args(args))?)
    }
}

fn to_owned_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
impl<R> TmuxClient<R> {
    pub(crate) fn runner_for_tests(&self) -> &R {
        &self.runner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::RecordingRunner;

    #[test]
    fn test_new_session_arguments() {
        let client = TmuxClient::with_runner("tmux", RecordingRunner::new());
        client
            .new_session("dev", Some("editor"), Some("~/code"))
            .unwrap();

        let calls = client.runner.recorded();
        assert_eq!(
            calls[0],
            vec![
                "tmux",
                "new-session",
                "-d",
                "-s",
                "dev",
                "-n",
                "editor",
                "-c",
                "~/code"
            ]
        );
    }

    #[test]
    fn test_new_session_omits_optional_flags() {
        let client = TmuxClient::with_runner("tmux", RecordingRunner::new());
        client.new_session("dev", None, None).unwrap();

        assert_eq!(
            client.runner.recorded()[0],
            vec!["tmux", "new-session", "-d", "-s", "dev"]
        );
    }

    #[test]
    fn test_send_keys_submits_with_enter() {
        let client = TmuxClient::with_runner("tmux", RecordingRunner::new());
        client.send_keys("dev:editor", "vim").unwrap();

        assert_eq!(
            client.runner.recorded()[0],
            vec!["tmux", "send-keys", "-t", "dev:editor", "vim", "C-m"]
        );
    }

    #[test]
    fn test_has_session_blank_name_is_false_without_running_anything() {
        let client = TmuxClient::with_runner("tmux", RecordingRunner::with_existing_session());
        assert!(!client.has_session("  "));
        assert!(client.runner.recorded().is_empty());
    }

    #[test]
    fn test_pane_base_index_parses_reply() {
        let runner = RecordingRunner {
            session_exists: true,
            pane_base_index: Some("1".to_string()),
            ..RecordingRunner::default()
        };
        let client = TmuxClient::with_runner("tmux", runner);
        assert_eq!(client.pane_base_index(), 1);
    }

    #[test]
    fn test_pane_base_index_defaults_to_zero_on_garbage() {
        let runner = RecordingRunner {
            session_exists: true,
            pane_base_index: Some("not-a-number".to_string()),
            ..RecordingRunner::default()
        };
        let client = TmuxClient::with_runner("tmux", runner);
        assert_eq!(client.pane_base_index(), 0);
    }

    #[test]
    fn test_check_installed_missing_binary() {
        let client = TmuxClient::new("rmux-test-no-such-binary-a1b2c3");
        let err = client.check_installed().unwrap_err();
        assert!(matches!(err, TmuxError::NotInstalled { .. }));
    }

    #[test]
    fn test_custom_tmux_command_is_used_for_every_call() {
        let client = TmuxClient::with_runner("/opt/tmux/bin/tmux", RecordingRunner::new());
        client.select_window("dev:server").unwrap();

        assert_eq!(client.runner.recorded()[0][0], "/opt/tmux/bin/tmux");
    }
}
