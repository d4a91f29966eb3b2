use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Name of the root folder the demo starts from.
    pub root: String,
    /// Prompt written before each operator read.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: "tmp".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Try to load the configuration file from, in order:
    ///
    /// 1. `$FOLDO_CONFIG`
    /// 2. `$XDG_CONFIG_HOME/foldo/config.toml`
    /// 3. `~/.config/foldo/config.toml`
    ///
    /// If none of these paths exist, return a default `Config`.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::locate() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Return the first config path that actually exists on disk, or `None`.
    fn locate() -> Option<PathBuf> {
        let candidates = Self::candidate_paths();
        candidates.into_iter().find(|p| p.is_file())
    }

    /// Ordered list of paths we check for a config file.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. $FOLDO_CONFIG
        if let Ok(p) = std::env::var("FOLDO_CONFIG") {
            paths.push(PathBuf::from(p));
        }

        // 2. $XDG_CONFIG_HOME/foldo/config.toml
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("foldo").join("config.toml"));
        }

        // 3. ~/.config/foldo/config.toml
        if let Ok(home) = std::env::var("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("foldo")
                    .join("config.toml"),
            );
        }

        paths
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
