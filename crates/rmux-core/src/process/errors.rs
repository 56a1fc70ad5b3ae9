#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to run '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' failed with {}", describe_failure(.code, .stderr))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Exit description combining the status with captured stderr when present.
fn describe_failure(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(c) => format!("exit status {}", c),
        None => "unknown status".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}
