//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user config and an explicit file.
///
/// # Examples
///
/// ```no_run
/// use rpath::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration source, lowest precedence first.
    ///
    /// 1. User config at `{data_dir}/config.yaml` (precedence 1), where
    ///    `data_dir` defaults to `~/.rpath`. Skipped if missing.
    /// 2. `explicit`, if given (precedence 2). Must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(explicit: Option<&Path>, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => match default_data_dir() {
                Ok(dir) => dir.join(CONFIG_FILE_NAME),
                Err(e) => {
                    log::debug!("skipping user config: {e}");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            log::debug!("no user config at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: format!("failed to read: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: format!("invalid YAML: {e}"),
        })
    }
}

/// The default data directory, `~/.rpath`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".rpath"))
        .ok_or_else(|| Error::Validation {
            field: "data_dir".into(),
            message: "cannot determine home directory".into(),
        })
}
