//! Session configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Environment variable consulted when no config path is given on the
/// command line.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Top-level configuration for a folio session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Cosmetic working-directory label shown in the prompt.
    pub directory_label: String,
    /// User name shown in the title line.
    pub user: String,
    /// Host name shown in the title line.
    pub host: String,
    /// Optional profile document replacing the built-in content.
    pub profile_path: Option<PathBuf>,
    /// Command names offered as quick-launch shortcuts on the welcome card.
    pub welcome_shortcuts: Vec<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            directory_label: "~".to_string(),
            user: "visitor".to_string(),
            host: "portfolio".to_string(),
            profile_path: None,
            welcome_shortcuts: ["about", "experience", "projects", "skills"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FolioConfig {
    /// Parse a config document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        // Relative profile paths are resolved against the config's directory.
        if let Some(profile) = config.profile_path.as_ref()
            && profile.is_relative()
            && let Some(dir) = path.parent()
        {
            config.profile_path = Some(dir.join(profile));
        }
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config from an explicit path, falling back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Title line in `user@host:label` form.
    pub fn title(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.directory_label)
    }

    fn validate(&self) -> Result<()> {
        if self.directory_label.trim().is_empty() {
            return Err(FolioError::Config(
                "directory_label must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self
            .welcome_shortcuts
            .iter()
            .find(|s| s.trim().is_empty() || s.contains(char::is_whitespace))
        {
            return Err(FolioError::Config(format!(
                "invalid welcome shortcut: {bad:?}"
            )));
        }
        Ok(())
    }
}
