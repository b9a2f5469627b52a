//! Shaper configuration
//!
//! Configuration is plain data with serde support so that a host application
//! can keep it next to its other settings as JSON.

use crate::{is_arabic, tables, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which neighbours count as Arabic letters when testing a join from the
/// previous character
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoiningScope {
    /// Only letters of the shaping table
    #[default]
    Letters,
    /// Any character in the Arabic ranges, including marks and digits
    ArabicBlock,
}

impl JoiningScope {
    /// Whether `c` is a joining candidate under this scope
    pub fn counts(self, c: char) -> bool {
        match self {
            JoiningScope::Letters => tables().is_letter(c),
            JoiningScope::ArabicBlock => is_arabic(c),
        }
    }
}

/// Shaper settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShaperConfig {
    /// Collapse lam followed by an alef variant into one ligature glyph
    pub ligatures: bool,
    /// Scope of the previous-join test
    pub joining_scope: JoiningScope,
    /// Skip Arabic combining marks when looking for neighbours
    pub transparent_marks: bool,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self {
            ligatures: true,
            joining_scope: JoiningScope::Letters,
            transparent_marks: false,
        }
    }
}

impl ShaperConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file, or return defaults if it doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match Self::from_json(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to parse shaper config, using defaults: {}",
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Write the config to disk, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Builder: toggle lam-alef ligatures
    pub fn with_ligatures(mut self, enabled: bool) -> Self {
        self.ligatures = enabled;
        self
    }

    /// Builder: set the joining scope
    pub fn with_joining_scope(mut self, scope: JoiningScope) -> Self {
        self.joining_scope = scope;
        self
    }

    /// Builder: skip combining marks when resolving joins
    pub fn with_transparent_marks(mut self, enabled: bool) -> Self {
        self.transparent_marks = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShaperError;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShaperConfig::default();
        assert!(config.ligatures);
        assert_eq!(config.joining_scope, JoiningScope::Letters);
        assert!(!config.transparent_marks);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ShaperConfig::from_json(r#"{"joining_scope": "arabic_block"}"#).unwrap();
        assert_eq!(config.joining_scope, JoiningScope::ArabicBlock);
        assert!(config.ligatures);
    }

    #[test]
    fn test_invalid_json() {
        let err = ShaperConfig::from_json(r#"{"ligatures": "yes"}"#).unwrap_err();
        assert!(matches!(err, ShaperError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ShaperConfig::default()
            .with_ligatures(false)
            .with_transparent_marks(true);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"transparent_marks\": true"));
        assert_eq!(ShaperConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ShaperConfig::load(temp_dir.path().join("shaper.json")).unwrap();
        assert_eq!(config, ShaperConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("shaper.json");
        let config = ShaperConfig::default().with_joining_scope(JoiningScope::ArabicBlock);

        config.save(&path).unwrap();
        assert_eq!(ShaperConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_corrupt_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shaper.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(ShaperConfig::load(&path).unwrap(), ShaperConfig::default());
    }
}
