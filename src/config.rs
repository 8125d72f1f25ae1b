use crate::cache::Cache;
use crate::error::{QuickError, Result};
use crate::highlight::ColorMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "QUICK_CACHE_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Editor used by `--edit`
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Where quick files are checked out
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,

    /// Git repository holding the quick files
    #[serde(default = "default_repository")]
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// "auto", "on" or "off"
    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Overrides $VISUAL and $EDITOR when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            repository: default_repository(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|p| p.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quick")
}

fn default_repository() -> String {
    "https://github.com/quickcheat/quick-sheets.git".to_string()
}

fn default_base_url() -> String {
    "https://quickcheat.github.io/quick-sheets".to_string()
}

impl Config {
    /// Get the XDG-style config file path (~/.config/quick/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("quick").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/quick/config.toml
    /// - Linux: ~/.config/quick/config.toml
    /// - Windows: %APPDATA%/quick/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quick").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/quick first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        let from_file = Self::xdg_config_path()
            .and_then(|path| Self::load_from(&path))
            .or_else(|| Self::config_path().and_then(|path| Self::load_from(&path)));

        #[cfg(not(target_os = "macos"))]
        let from_file = Self::config_path().and_then(|path| Self::load_from(&path));

        let mut config = from_file.unwrap_or_default();

        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|d| !d.is_empty()) {
            debug!(dir = ?dir, "cache directory from environment");
            config.cache.dir = PathBuf::from(dir);
        }

        config
    }

    /// Read a config file. Missing files are silent, malformed ones are logged.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Write the config as TOML to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| QuickError::Config(e.to_string()))?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn cache(&self) -> Cache {
        Cache::new(&self.cache.dir)
    }

    /// Color mode, letting a command-line flag override the config file
    pub fn color_mode(&self, flag: Option<ColorMode>) -> ColorMode {
        flag.unwrap_or(self.display.color)
    }
}
