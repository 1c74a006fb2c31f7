use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::lang::Language;
use crate::time::PhraseFlags;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgoConfig {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub phrase: PhraseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhraseConfig {
    #[serde(default)]
    pub no_suffix: bool,
    #[serde(default)]
    pub online: bool,
}

fn default_language() -> String {
    Language::default().code().to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl AgoConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ago/config.toml"));
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", "ago") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AgoConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AgoConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        debug!(path = %path.display(), lang = %config.locale.language, "Config loaded");
        Ok(config)
    }

    /// Configured language; unknown tags fall back to English.
    pub fn language(&self) -> Language {
        Language::from_code_or_default(&self.locale.language)
    }

    pub fn flags(&self) -> PhraseFlags {
        let mut flags = PhraseFlags::empty();
        flags.set(PhraseFlags::NO_SUFFIX, self.phrase.no_suffix);
        flags.set(PhraseFlags::ONLINE, self.phrase.online);
        flags
    }
}
