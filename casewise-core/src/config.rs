//! Matcher configuration, optionally loaded from casewise.toml.

#[cfg(feature = "config")]
use std::{fs, path::Path};

#[cfg(feature = "config")]
use crate::error::{IoResultExt, MatchError, MatchResult};

/// Name of the configuration file looked up by [`load_config`].
#[cfg(feature = "config")]
pub const CONFIG_FILE: &str = "casewise.toml";

/// Diagnostic settings attached to a matcher with `with_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
pub struct MatchConfig {
    /// Name attached to trace events and to the matcher's outcome.
    pub label: Option<String>,
    /// Also trace branches whose condition failed.
    pub trace_misses: Option<bool>,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Enable or disable tracing of failed branches.
    pub fn with_trace_misses(mut self, enabled: bool) -> Self {
        self.trace_misses = Some(enabled);
        self
    }

    /// Parses a configuration from TOML text.
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> MatchResult<Self> {
        toml::from_str(content).map_err(|e| MatchError::config(CONFIG_FILE, e.to_string()))
    }
}

/// Loads configuration from casewise.toml under `root` if it exists.
#[cfg(feature = "config")]
pub fn load_config(root: &Path) -> MatchResult<Option<MatchConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = toml::from_str(&content).map_err(|e| MatchError::config(&path, e.to_string()))?;
    Ok(Some(cfg))
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join("casewise_tests")
            .join(format!("{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_from_toml_str() {
        let cfg =
            MatchConfig::from_toml_str("label = \"http-status\"\ntrace_misses = true\n").unwrap();
        assert_eq!(cfg.label.as_deref(), Some("http-status"));
        assert_eq!(cfg.trace_misses, Some(true));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = MatchConfig::from_toml_str("trace_misses = \"yes\"").unwrap_err();
        assert!(matches!(err, MatchError::Config { .. }));
    }

    #[test]
    fn test_load_config_missing() {
        let dir = temp_dir("missing");
        assert!(load_config(&dir).unwrap().is_none());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_present() {
        let dir = temp_dir("present");
        fs::write(dir.join(CONFIG_FILE), "label = \"parser\"").unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg, MatchConfig::new().with_label("parser"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_invalid_reports_path() {
        let dir = temp_dir("invalid");
        fs::write(dir.join(CONFIG_FILE), "label = [").unwrap();

        let err = load_config(&dir).unwrap_err();
        assert_eq!(err.path(), Some(&dir.join(CONFIG_FILE)));

        fs::remove_dir_all(&dir).ok();
    }
}
