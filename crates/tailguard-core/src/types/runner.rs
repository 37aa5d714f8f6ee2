//! Runner identity used for baseline lookup.

use std::fmt;

use serde::Serialize;

use crate::config::ConfigSource;
use crate::constants::{env_keys, FALLBACK_RUNNER_ID, RUNNER_ID_SEPARATOR};

/// Key selecting a per-runner baseline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunnerIdentity(String);

impl RunnerIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Explicit override, else `RUNNER_NAME-RUNNER_OS-RUNNER_ARCH` (present
    /// pieces only), else `manual-runner`.
    pub fn resolve(explicit: Option<&str>, source: &dyn ConfigSource) -> Self {
        if let Some(id) = explicit.filter(|s| !s.is_empty()) {
            return Self::new(id);
        }
        let pieces: Vec<String> = [env_keys::RUNNER_NAME, env_keys::RUNNER_OS, env_keys::RUNNER_ARCH]
            .iter()
            .filter_map(|key| source.get(key).filter(|v| !v.is_empty()))
            .collect();
        if pieces.is_empty() {
            Self::new(FALLBACK_RUNNER_ID)
        } else {
            Self(pieces.join(RUNNER_ID_SEPARATOR))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunnerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapSource;

    #[test]
    fn explicit_wins() {
        let src = MapSource::new().with(env_keys::RUNNER_NAME, "ci");
        assert_eq!(RunnerIdentity::resolve(Some("box-7"), &src).as_str(), "box-7");
    }

    #[test]
    fn pieces_join_in_name_os_arch_order() {
        let src = MapSource::new()
            .with(env_keys::RUNNER_ARCH, "X64")
            .with(env_keys::RUNNER_NAME, "gha")
            .with(env_keys::RUNNER_OS, "Linux");
        assert_eq!(RunnerIdentity::resolve(None, &src).as_str(), "gha-Linux-X64");

        let partial = MapSource::new().with(env_keys::RUNNER_OS, "macOS");
        assert_eq!(RunnerIdentity::resolve(None, &partial).as_str(), "macOS");
    }

    #[test]
    fn falls_back_to_sentinel() {
        assert_eq!(
            RunnerIdentity::resolve(None, &MapSource::new()).as_str(),
            FALLBACK_RUNNER_ID
        );
    }
}
