use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

/// Site-wide settings read from `folio.toml`. Every field has a default so
/// an absent or partial file still builds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub owner: String,
    pub description: String,
    pub environment: Environment,
    pub content: PathBuf,
    pub output_dir: PathBuf,
    pub asset_dir: PathBuf,
    /// Footer copyright year; the current local year when unset.
    pub year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Portfolio".to_string(),
            owner: "Site Owner".to_string(),
            description: String::new(),
            environment: Environment::Production,
            content: PathBuf::from("content.toml"),
            output_dir: PathBuf::from("dist"),
            asset_dir: PathBuf::from("assets"),
            year: None,
        }
    }
}

impl SiteConfig {
    /// Load the config at `path`. A missing file yields the defaults;
    /// an unreadable or invalid one is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            warn!("{} not found, using default config", path.display());
            return Ok(SiteConfig::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let mut config = Self::from_toml_str(&raw)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Relative paths in the file are taken relative to the file itself.
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.content, &mut self.output_dir, &mut self.asset_dir] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
