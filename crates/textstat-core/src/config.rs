//! Configuration loading and discovery.
//!
//! Discovers configuration by walking up from the working directory,
//! merging user config from the XDG config directory, then layering
//! `TEXTSTAT_*` environment variables on top.
//!
//! # Config file locations (in order of precedence, highest first):
//! - `textstat.<ext>` in the working directory or any parent
//! - `.textstat.<ext>` in the working directory or any parent
//! - `~/.config/textstat/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use textstat_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("log level: {}", config.log_level.as_str());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The configuration for textstat.
///
/// Deserialized from config files found during discovery (TOML, YAML,
/// or JSON), with every field optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files (stderr-only logging if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes.
    ///
    /// Oversized inputs fail fast instead of being read into memory.
    /// Omit to use [`crate::DEFAULT_MAX_INPUT_BYTES`].
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Strip markdown formatting from `.md` inputs before analysis.
    ///
    /// Default: `true`. Disable to analyze markdown sources verbatim,
    /// markers and all.
    pub strip_markdown: Option<bool>,
}

impl Config {
    /// Whether `.md` inputs should be stripped to prose before analysis.
    pub fn strip_markdown_enabled(&self) -> bool {
        self.strip_markdown.unwrap_or(true)
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so the
/// host can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "textstat";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the XDG directory.
    include_user_config: bool,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub const fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader walks up from this directory looking for config files,
    /// stopping at the first directory with any match or at a `.git`
    /// boundary above the start.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/textstat/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `TEXTSTAT_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/textstat/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // TEXTSTAT_LOG_LEVEL=debug, TEXTSTAT_MAX_INPUT_BYTES=1048576, etc.
        figment = figment.merge(Env::prefixed("TEXTSTAT_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }
}

/// Find project config files by walking up from the given directory.
///
/// Returns all matching config files from the closest directory that has
/// any match, ordered low-to-high precedence: dotfiles before regular
/// files.
fn find_project_configs(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut current = Some(start.to_path_buf());

    while let Some(dir) = current {
        let mut found = Vec::new();

        // Search order (low→high precedence, figment merges last-wins):
        //   1. .textstat.{toml,yaml,yml,json}
        //   2. textstat.{toml,yaml,yml,json}
        for ext in CONFIG_EXTENSIONS {
            let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
            if dotfile.is_file() {
                found.push(dotfile);
            }
        }
        for ext in CONFIG_EXTENSIONS {
            let regular = dir.join(format!("{APP_NAME}.{ext}"));
            if regular.is_file() {
                found.push(regular);
            }
        }

        if !found.is_empty() {
            return found;
        }

        // Check for the boundary AFTER checking config files, so a config
        // in the same directory as the marker is found.
        if dir.join(".git").exists() && dir != start {
            break;
        }

        current = dir.parent().map(Utf8Path::to_path_buf);
    }

    Vec::new()
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_dir = proj_dirs.config_dir();

    for ext in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("config.{ext}"));
        if config_path.is_file() {
            return Utf8PathBuf::from_path_buf(config_path).ok();
        }
    }

    None
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.max_input_bytes.is_none());
        assert!(!config.disable_input_limit);
        assert!(config.strip_markdown_enabled());
    }

    #[test]
    fn load_with_no_sources_yields_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .load()
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn explicit_toml_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_level = \"debug\"\nmax_input_bytes = 1024\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(sources.primary_file(), Some(path.as_path()));
    }

    #[test]
    fn project_config_is_discovered_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".textstat.yaml"),
            "log_level: warn\nstrip_markdown: false\n",
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let nested = Utf8PathBuf::try_from(nested).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.strip_markdown_enabled());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn regular_file_outranks_dotfile() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".textstat.toml"), "log_level = \"debug\"\n").unwrap();
        std::fs::write(dir.path().join("textstat.toml"), "log_level = \"error\"\n").unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn invalid_config_reports_deserialize_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "log_level = \"loudest\"\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
