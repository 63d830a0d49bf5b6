//! Configuration management for feed

use crate::comment::{REQUIRED_MESSAGE, SEED_COMMENT};
use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local configuration directory
pub const LOCAL_CONFIG_DIR: &str = ".feed";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed source settings
    pub feed: FeedConfig,
    /// Comment thread settings
    pub comments: CommentsConfig,
    /// UI settings
    pub ui: UiConfig,
    /// Export settings
    pub export: ExportConfig,
    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Feed source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed file to load instead of the built-in demo posts
    pub path: Option<PathBuf>,
    /// Comment every thread starts with
    pub seed_comment: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: None,
            seed_comment: SEED_COMMENT.to_string(),
        }
    }
}

/// Comment thread configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Name shown above every comment
    pub author: String,
    /// Avatar URL of the comment author
    pub avatar_url: String,
    /// Message shown when publishing an empty comment
    pub required_message: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            author: "João Medeiros".to_string(),
            avatar_url: "https://github.com/Diego3g.png".to_string(),
            required_message: REQUIRED_MESSAGE.to_string(),
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme ("default" or "mono")
    pub theme: String,
    /// Show the key hint line in the status bar
    pub show_help_hint: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_help_hint: true,
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used by `show` when none is given
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
        }
    }
}

impl Config {
    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FeedError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| FeedError::Config(format!("{}: {}", path.display(), e)))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory that relative paths in this config are resolved against:
    /// the project root for a `.feed/config.toml`, otherwise the directory
    /// holding the file. `None` for built-in defaults.
    pub fn base_dir(&self) -> Option<PathBuf> {
        let dir = self.source.as_deref()?.parent()?;
        match dir.file_name() {
            Some(name) if name == LOCAL_CONFIG_DIR => dir.parent().map(Path::to_path_buf),
            _ => Some(dir.to_path_buf()),
        }
    }

    /// The configured feed file, resolved against [`Config::base_dir`]
    pub fn feed_path(&self) -> Option<PathBuf> {
        let path = self.feed.path.as_deref()?;
        match self.base_dir() {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.to_path_buf()),
        }
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Project-local config path under `root`
    pub fn local_path(root: &Path) -> PathBuf {
        root.join(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME)
    }

    /// Per-user config path
    pub fn user_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "feed")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Find the config file to use: explicit path, then the project-local
    /// file, then the per-user file.
    pub fn locate(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = Self::local_path(root);
        if local.exists() {
            return Some(local);
        }

        Self::user_path().filter(|p| p.exists())
    }

    /// Load the effective configuration, falling back to defaults
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        match Self::locate(explicit, root) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
