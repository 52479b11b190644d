use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::EnumString;

const FILE_NAME: &str = ".git-open.yaml";
const ENV_PREFIX: &str = "GIT_OPEN_";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print the URL instead of opening it
    pub plain: bool,
    /// Command used to open URLs (e.g. "firefox --new-tab")
    pub browser: Option<String>,
    pub branch_links: BranchLinks,
    /// File the values came from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// When the branch segment is added to the repository URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BranchLinks {
    /// Always link to the current branch
    Always,
    /// Link to the repository root when on the remote's default branch
    #[default]
    NonDefault,
}

impl Config {
    /// Get the default config file path (`$HOME/.git-open.yaml`)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(FILE_NAME))
    }

    /// Load config from `explicit` or the default path, then apply
    /// `GIT_OPEN_*` environment overrides.
    ///
    /// Reading is best effort: a file that is missing or does not parse is
    /// reported and defaults are used instead. Only an explicit path warns
    /// about being missing.
    pub fn load(explicit: Option<&Path>) -> Self {
        let mut config = match explicit {
            Some(path) => Self::read_or_default(path),
            None => Self::load_default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn load_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(err) => {
                log::debug!("skipping default config: {}", err);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        Self::read_or_default(&path)
    }

    fn read_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!(
                    "{} ignoring config file {}: {:#}",
                    "Warning:".yellow(),
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Override values from environment variables named after the keys.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let key = |name: &str| format!("{}{}", ENV_PREFIX, name);

        if let Some(value) = var(&key("PLAIN")) {
            match parse_bool(&value) {
                Some(plain) => self.plain = plain,
                None => log::warn!("Ignoring {}={:?}: expected a boolean", key("PLAIN"), value),
            }
        }

        if let Some(value) = var(&key("BROWSER")) {
            self.browser = Some(value);
        }

        if let Some(value) = var(&key("BRANCH_LINKS")) {
            match BranchLinks::from_str(value.trim()) {
                Ok(links) => self.branch_links = links,
                Err(_) => log::warn!(
                    "Ignoring {}={:?}: expected 'always' or 'non_default'",
                    key("BRANCH_LINKS"),
                    value
                ),
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
