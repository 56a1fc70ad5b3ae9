//! Update check against GitHub's latest-release API.

use std::time::Duration;

use semver::Version;
use tracing::debug;

/// Repository queried for releases.
pub const REPO: &str = "rmux-dev/rmux";

/// Request timeout; the check is opt-in and should never hang a command.
const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Update check failed: {message}")]
    RequestFailed { message: String },

    #[error("Failed to parse release response: {message}")]
    ParseFailed { message: String },

    #[error("Failed to parse version '{version}': {source}")]
    BadVersion {
        version: String,
        source: semver::Error,
    },
}

/// Outcome of an update check.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    UpToDate,
    UpdateAvailable {
        latest: String,
        url: Option<String>,
    },
}

/// Query GitHub for the latest release of `repo` and compare against
/// `current_version` (leading `v` tolerated on both sides).
pub fn check_for_update(repo: &str, current_version: &str) -> Result<UpdateStatus, UpdateError> {
    let (latest, url) = fetch_latest_release(repo)?;
    debug!(event = "core.update.latest_fetched", latest = %latest);

    if is_newer(current_version, &latest)? {
        Ok(UpdateStatus::UpdateAvailable { latest, url })
    } else {
        Ok(UpdateStatus::UpToDate)
    }
}

/// Fetch the latest release tag (without leading `v`) and its HTML URL.
fn fetch_latest_release(repo: &str) -> Result<(String, Option<String>), UpdateError> {
    let api = format!("https://api.github.com/repos/{}/releases/latest", repo);

    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into();

    let mut body = agent
        .get(&api)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", "rmux-update-check")
        .call()
        .map_err(|e| UpdateError::RequestFailed {
            message: e.to_string(),
        })?
        .into_body();

    let body_str = body
        .read_to_string()
        .map_err(|e| UpdateError::RequestFailed {
            message: format!("failed reading response body: {}", e),
        })?;

    let json: serde_json::Value =
        serde_json::from_str(&body_str).map_err(|e| UpdateError::ParseFailed {
            message: e.to_string(),
        })?;

    let tag = json
        .get("tag_name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| UpdateError::ParseFailed {
            message: "missing tag_name in release response".to_string(),
        })?;
    let url = json
        .get("html_url")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok((tag.trim().trim_start_matches('v').to_string(), url))
}

/// Whether `latest` is a strictly newer semantic version than `current`.
fn is_newer(current: &str, latest: &str) -> Result<bool, UpdateError> {
    let current = parse_version(current)?;
    let latest = parse_version(latest)?;
    Ok(latest > current)
}

fn parse_version(raw: &str) -> Result<Version, UpdateError> {
    let trimmed = raw.trim().trim_start_matches('v');
    Version::parse(trimmed).map_err(|e| UpdateError::BadVersion {
        version: raw.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_newer_basic_ordering() {
        assert!(is_newer("0.1.0", "0.2.0").unwrap());
        assert!(!is_newer("0.2.0", "0.2.0").unwrap());
        assert!(!is_newer("0.3.0", "0.2.9").unwrap());
    }

    #[test]
    fn test_is_newer_tolerates_v_prefix() {
        assert!(is_newer("v1.0.0", "v1.0.1").unwrap());
    }

    #[test]
    fn test_prerelease_orders_below_stable() {
        assert!(is_newer("1.0.0-beta.1", "1.0.0").unwrap());
        assert!(!is_newer("1.0.0", "1.0.0-beta.1").unwrap());
    }

    #[test]
    fn test_garbage_version_is_an_error() {
        let err = is_newer("not-a-version", "1.0.0").unwrap_err();
        assert!(matches!(err, UpdateError::BadVersion { .. }));
    }

    #[test]
    fn test_release_json_extraction() {
        // Shape check for the fields fetch_latest_release relies on.
        let json: serde_json::Value = serde_json::from_str(
            r#"{"tag_name": "v0.2.0", "html_url": "https://github.com/rmux-dev/rmux/releases/tag/v0.2.0"}"#,
        )
        .unwrap();
        assert_eq!(json.get("tag_name").and_then(|v| v.as_str()), Some("v0.2.0"));
        assert!(
            json.get("html_url")
                .and_then(|v| v.as_str())
                .unwrap()
                .starts_with("https://github.com/")
        );
    }
}
