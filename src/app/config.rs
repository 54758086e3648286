use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyProfile {
    #[default]
    Default,
    Vim,
}

/// User settings read from `~/.config/git-assistant/config.toml`.
///
/// The file is optional and only ever read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub git_program: String,
    pub key_profile: KeyProfile,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
            key_profile: KeyProfile::Default,
            log_file: None,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("git-assistant");
        path.push("config.toml");
        path
    })
}

pub fn parse(text: &str) -> Result<Config> {
    toml::from_str(text).context("Invalid config file")
}

/// Loads the config from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse config at {}", path.display()))
}

pub fn load() -> Result<Config> {
    match get_config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse(
            r#"
git_program = "/usr/local/bin/git"
key_profile = "vim"
log_file = "/tmp/git-assistant.log"
"#,
        )
        .unwrap();
        assert_eq!(config.git_program, "/usr/local/bin/git");
        assert_eq!(config.key_profile, KeyProfile::Vim);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/git-assistant.log")));
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        assert!(parse(r#"key_profile = "emacs""#).is_err());
    }

    #[test]
    fn test_load_from_missing_and_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "key_profile = \"vim\"\n").unwrap();
        let config = load_from(&path).unwrap();
        assert_eq!(config.key_profile, KeyProfile::Vim);
        assert_eq!(config.git_program, "git");

        std::fs::write(&path, "git_program = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }
}
