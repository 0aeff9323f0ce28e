use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hunspell word-list file (*.dic).
    pub dictionary_file: Option<PathBuf>,
    /// Hunspell affix file (*.aff).
    pub affix_file: Option<PathBuf>,
    /// Two-line tab-delimited session file (user dictionary + ignore list).
    pub session_file: Option<PathBuf>,

    /// Override for the word-boundary token pattern.
    #[serde(default)]
    pub word_pattern: Option<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_file: None,
            affix_file: None,
            session_file: None,
            word_pattern: None,
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionary_file: Option<PathBuf>,
        affix_file: Option<PathBuf>,
        session_file: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellfix.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if dictionary_file.is_some() {
            config.dictionary_file = dictionary_file;
        }
        if affix_file.is_some() {
            config.affix_file = affix_file;
        }
        if session_file.is_some() {
            config.session_file = session_file;
        }

        // Set default session file if not specified
        if config.session_file.is_none() {
            config.session_file = Self::default_session_path();
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary_file.is_some() {
            self.dictionary_file = other.dictionary_file;
        }
        if other.affix_file.is_some() {
            self.affix_file = other.affix_file;
        }
        if other.session_file.is_some() {
            self.session_file = other.session_file;
        }
        if other.word_pattern.is_some() {
            self.word_pattern = other.word_pattern;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_session_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.config_dir().join("session.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.dictionary_file.is_none());
        assert_eq!(config.max_suggestions, 8);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            dictionary_file: Some(PathBuf::from("en_US.dic")),
            max_suggestions: 3,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.dictionary_file, Some(PathBuf::from("en_US.dic")));
        assert_eq!(merged.max_suggestions, 3);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            dictionary_file = "en_US.dic"
            affix_file = "en_US.aff"
            max_suggestions = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.affix_file, Some(PathBuf::from("en_US.aff")));
        assert_eq!(config.max_suggestions, 5);
        assert!(config.word_pattern.is_none());
    }
}
