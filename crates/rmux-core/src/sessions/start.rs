//! Session orchestration: realize a [`Project`] as live tmux state.
//!
//! Strictly sequential: one tmux command at a time, in declared window
//! order. Re-running `start` against a live session performs no creation
//! commands; it only re-attaches (or switches, when already inside tmux).

use tracing::{info, warn};

use rmux_config::{Project, Window};

use crate::process::CommandRunner;
use crate::sessions::errors::SessionError;
use crate::tmux::{TmuxClient, inside_tmux};

/// How a `start` invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// The session was created and every window materialized.
    Started { session: String, attach: AttachOutcome },
    /// The session already existed; nothing was rebuilt.
    AlreadyRunning { session: String, attach: AttachOutcome },
}

impl StartOutcome {
    pub fn attach(&self) -> &AttachOutcome {
        match self {
            StartOutcome::Started { attach, .. } | StartOutcome::AlreadyRunning { attach, .. } => {
                attach
            }
        }
    }
}

/// Terminal hand-off result. `AttachFailed` is not an error: the session
/// exists, the caller just could not be bound to it (non-interactive
/// context, typically) and should be told how to attach manually.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachOutcome {
    /// Blocking attach completed (the user has since detached).
    Attached,
    /// Already inside tmux; the client was switched instead.
    Switched,
    /// Attaching was not requested; the session is left detached.
    Detached,
    /// Attach failed; carries the message to surface as a hint.
    AttachFailed { message: String },
}

/// Start `project`: create the session if absent, then attach or switch.
pub fn start_project<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    project: &Project,
    attach: bool,
) -> Result<StartOutcome, SessionError> {
    start_project_nested(tmux, project, attach, inside_tmux())
}

/// As [`start_project`], with the nesting decision injected. Split out so
/// tests control the attach-vs-switch branch without touching `$TMUX`.
pub fn start_project_nested<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    project: &Project,
    attach: bool,
    nested: bool,
) -> Result<StartOutcome, SessionError> {
    tmux.check_installed()?;

    if tmux.has_session(&project.name) {
        info!(event = "core.session.already_running", session = %project.name);
        let attach_outcome = attach_or_switch(tmux, &project.name, attach, nested)?;
        return Ok(StartOutcome::AlreadyRunning {
            session: project.name.clone(),
            attach: attach_outcome,
        });
    }

    create_session(tmux, project)?;

    for (index, window) in project.windows.iter().enumerate() {
        // Window 0 was created with the session; it is only configured.
        if index > 0 {
            tmux.new_window(&project.name, &window.name, window.root.as_deref())
                .map_err(|e| SessionError::CreateWindowFailed {
                    session: project.name.clone(),
                    window: window.name.clone(),
                    source: e,
                })?;
        }
        setup_window(tmux, project, window)?;
    }

    select_startup(tmux, project)?;

    info!(
        event = "core.session.start_completed",
        session = %project.name,
        windows = project.windows.len()
    );

    let attach_outcome = attach_or_switch(tmux, &project.name, attach, nested)?;
    Ok(StartOutcome::Started {
        session: project.name.clone(),
        attach: attach_outcome,
    })
}

fn create_session<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    project: &Project,
) -> Result<(), SessionError> {
    let first_window = project.windows.first().map(|w| w.name.as_str());
    tmux.new_session(&project.name, first_window, project.root.as_deref())
        .map_err(|e| SessionError::CreateSessionFailed {
            session: project.name.clone(),
            source: e,
        })?;
    info!(event = "core.session.created", session = %project.name);
    Ok(())
}

/// Configure one window: layout, then panes (which suppress plain commands).
fn setup_window<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    project: &Project,
    window: &Window,
) -> Result<(), SessionError> {
    // Windows always carry a name (the normalizer synthesizes one), so the
    // target never falls back to a base-index-sensitive position.
    let target = format!("{}:{}", project.name, window.name);

    if let Some(layout) = &window.layout {
        if let Err(e) = tmux.select_layout(&target, layout) {
            if project.strict_layout {
                return Err(SessionError::LayoutFailed {
                    window: window.name.clone(),
                    layout: layout.clone(),
                    source: e,
                });
            }
            warn!(
                event = "core.session.layout_skipped",
                window = %window.name,
                layout = %layout,
                error = %e
            );
        }
    }

    let wrap = |e| SessionError::ConfigureWindowFailed {
        session: project.name.clone(),
        window: window.name.clone(),
        source: e,
    };

    if !window.panes.is_empty() {
        // One split per extra pane, then a tiled spread. The spread is
        // cosmetic and stays best-effort even under strict_layout.
        for _ in 1..window.panes.len() {
            tmux.split_window_horizontal(&target).map_err(wrap)?;
        }
        if let Err(e) = tmux.select_layout(&target, "tiled") {
            warn!(event = "core.session.tiled_skipped", window = %window.name, error = %e);
        }

        let base_index = tmux.pane_base_index();
        for (position, pane) in window.panes.iter().enumerate() {
            let pane_target = format!("{}.{}", target, base_index + position as i64);
            for command in &pane.commands {
                tmux.send_keys(&pane_target, command).map_err(wrap)?;
            }
        }
    } else {
        for command in &window.commands {
            tmux.send_keys(&target, command).map_err(wrap)?;
        }
    }

    Ok(())
}

fn select_startup<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    project: &Project,
) -> Result<(), SessionError> {
    let Some(startup_window) = project.startup_window.as_deref() else {
        return Ok(());
    };

    let window_target = format!("{}:{}", project.name, startup_window);
    tmux.select_window(&window_target)
        .map_err(|e| SessionError::StartupSelectionFailed {
            window: startup_window.to_string(),
            source: e,
        })?;

    // Pane selection only triggers for positive indices; 0 means unset.
    if let Some(pane) = project.startup_pane.filter(|p| *p > 0) {
        let pane_target = format!("{}.{}", window_target, pane);
        tmux.select_pane(&pane_target)
            .map_err(|e| SessionError::StartupSelectionFailed {
                window: startup_window.to_string(),
                source: e,
            })?;
    }
    Ok(())
}

fn attach_or_switch<R: CommandRunner>(
    tmux: &TmuxClient<R>,
    session: &str,
    attach: bool,
    nested: bool,
) -> Result<AttachOutcome, SessionError> {
    if !attach {
        return Ok(AttachOutcome::Detached);
    }

    if nested {
        // A failed switch is a real error: the client exists and the
        // command is non-blocking, so there is no interactive excuse.
        tmux.switch_client(session)?;
        return Ok(AttachOutcome::Switched);
    }

    match tmux.attach_session(session) {
        Ok(()) => Ok(AttachOutcome::Attached),
        Err(e) => {
            // Typically a non-interactive context. The session was built
            // correctly, so this is a hint, not a failure.
            warn!(event = "core.session.attach_failed", session = %session, error = %e);
            Ok(AttachOutcome::AttachFailed {
                message: format!(
                    "could not attach automatically ({}). Run: tmux attach -t {}",
                    e, session
                ),
            })
        }
    }
}
