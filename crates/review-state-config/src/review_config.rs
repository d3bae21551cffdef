//! Store configuration
//!
//! Configuration loaded from .review-state.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which issues the frame-change transition keeps in `frame_issues`
///
/// Job load, review initialization and draft completion always combine the
/// persisted issues with the draft's issues. A plain frame change historically
/// filters the persisted issues only; `IncludeDraft` makes it consistent with
/// the other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameChangePolicy {
    /// Filter persisted issues only
    #[default]
    PersistedOnly,
    /// Filter persisted issues followed by the active review's issues
    IncludeDraft,
}

/// Store configuration loaded from .review-state.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Install the logging middleware on the default store
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// Issues considered when the displayed frame changes
    #[serde(default)]
    pub frame_change_policy: FrameChangePolicy,
}

fn default_log_actions() -> bool {
    true
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            log_actions: default_log_actions(),
            frame_change_policy: FrameChangePolicy::default(),
        }
    }
}

impl ReviewConfig {
    /// Load config from CWD first, then the user config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded review config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default review config");
        Self::default()
    }

    /// Load config from an explicit path, failing if it is missing or invalid
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ReviewConfig::default();
        assert!(config.log_actions);
        assert_eq!(config.frame_change_policy, FrameChangePolicy::PersistedOnly);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_actions = false
            frame_change_policy = "include-draft"
        "#;
        let config: ReviewConfig = toml::from_str(toml).unwrap();
        assert!(!config.log_actions);
        assert_eq!(config.frame_change_policy, FrameChangePolicy::IncludeDraft);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            frame_change_policy = "persisted-only"
        "#;
        let config: ReviewConfig = toml::from_str(toml).unwrap();
        // log_actions should use default
        assert!(config.log_actions);
        assert_eq!(config.frame_change_policy, FrameChangePolicy::PersistedOnly);
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let toml = r#"frame_change_policy = "everything""#;
        assert!(toml::from_str::<ReviewConfig>(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_actions = false").unwrap();

        let config = ReviewConfig::load_from(file.path()).unwrap();
        assert!(!config.log_actions);
        assert_eq!(config.frame_change_policy, FrameChangePolicy::PersistedOnly);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReviewConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
