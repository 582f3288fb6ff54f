//! Bot configuration files.

use config::{Config, File, FileFormat};
use sabafly_core::Snowflake;
use sabafly_error::{ConfigError, SabaflyError, SabaflyResult};
use sabafly_logging::{Level, LoggingConfig, RotatingLogger, init_logging_with_level};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const DEFAULT_CONFIG: &str = include_str!("../sabafly.toml");

/// Settings a bot reads at startup.
///
/// Every field has a default, so a file only needs the values it changes.
///
/// # Example
///
/// ```toml
/// dev_mode = true
/// dev_guild_ids = ["175928847299117063"]
/// token = "..."
///
/// [logging]
/// max_lines = 1000
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct BotConfig {
    /// Run with development behaviour
    #[serde(default)]
    dev_mode: bool,

    /// Only answer developers
    #[serde(default)]
    dev_only: bool,

    /// Guilds that count as development guilds
    #[serde(default, alias = "dev_guild_id")]
    dev_guild_ids: Vec<Snowflake>,

    /// Users that count as developers
    #[serde(default, alias = "dev_user_id")]
    dev_user_ids: Vec<Snowflake>,

    /// Minimum level to log when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    log_level: Level,

    /// Bot token
    #[serde(default = "default_token")]
    token: String,

    /// Whether commands are usable in DMs
    #[serde(default)]
    dm_permission: bool,

    /// Register application commands on startup
    #[serde(default = "default_sync_commands")]
    sync_commands: bool,

    /// OAuth2 application ID
    #[serde(default)]
    client_id: Snowflake,

    /// OAuth2 client secret
    #[serde(default)]
    secret: String,

    /// Log file settings
    #[serde(default)]
    logging: LoggingConfig,
}

fn default_log_level() -> Level {
    Level::Info
}

fn default_token() -> String {
    "YOUR TOKEN HERE".to_string()
}

fn default_sync_commands() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            dev_only: false,
            dev_guild_ids: Vec::new(),
            dev_user_ids: Vec::new(),
            log_level: default_log_level(),
            token: default_token(),
            dm_permission: false,
            sync_commands: default_sync_commands(),
            client_id: Snowflake::default(),
            secret: String::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// File formats a default config can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn render(self, config: &BotConfig) -> Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML, JSON or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SabaflyResult<Self> {
        debug!("Loading bot configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// 1. Bundled defaults (`sabafly.toml` shipped with the library)
    /// 2. `~/.config/sabafly/sabafly.toml`
    /// 3. `./sabafly.{toml,json,yaml}`
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be parsed.
    #[instrument]
    pub fn load() -> SabaflyResult<Self> {
        debug!("Loading bot configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sabafly/sabafly.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("sabafly").required(false));

        builder
            .build()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SabaflyError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load `path`, or write a default config there if it does not exist.
    ///
    /// The default is written as TOML, JSON or YAML according to the
    /// extension. Creating the file is reported as an error so that the
    /// caller stops and the token can be filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not `toml`, `json`, `yaml` or
    /// `yml`, if the file was just created, or if it cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_create(path: impl AsRef<Path>) -> SabaflyResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| {
            ConfigError::new(format!("unknown config file type: {}", path.display()))
        })?;

        if path.exists() {
            return Self::from_file(path);
        }

        let contents = format.render(&Self::default()).map_err(|e| {
            ConfigError::new(format!("Failed to serialize default configuration: {}", e))
        })?;
        let write_error = |e: std::io::Error| {
            ConfigError::new(format!("Failed to write {}: {}", path.display(), e))
        };
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(write_error)?
            .write_all(contents.as_bytes())
            .map_err(write_error)?;

        info!(?format, "Wrote default configuration");
        Err(ConfigError::new(format!(
            "config file not found, created new one at {}",
            path.display()
        ))
        .into())
    }

    /// Install the global `tracing` subscriber described by this config.
    ///
    /// Logs go to stdout and to the rotating file in `logging`, filtered by
    /// `RUST_LOG` or, when that is unset, by `log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init_logging(&self) -> SabaflyResult<Arc<RotatingLogger>> {
        init_logging_with_level(self.logging.clone(), self.log_level)
    }

    /// Whether `id` is a developer user or a development guild.
    pub fn is_dev(&self, id: Snowflake) -> bool {
        self.is_dev_user(id) || self.is_dev_guild(id)
    }

    /// Whether `id` is a developer user.
    pub fn is_dev_user(&self, id: Snowflake) -> bool {
        self.dev_user_ids.contains(&id)
    }

    /// Whether `id` is a development guild.
    pub fn is_dev_guild(&self, id: Snowflake) -> bool {
        self.dev_guild_ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default() {
        let bundled: BotConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(bundled, BotConfig::default());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.ini")), None);
        assert_eq!(Format::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_dev_checks() {
        let config = BotConfig::default()
            .with_dev_user_ids(vec![Snowflake::new(1)])
            .with_dev_guild_ids(vec![Snowflake::new(2)]);

        assert!(config.is_dev_user(Snowflake::new(1)));
        assert!(!config.is_dev_guild(Snowflake::new(1)));
        assert!(config.is_dev_guild(Snowflake::new(2)));
        assert!(config.is_dev(Snowflake::new(1)));
        assert!(config.is_dev(Snowflake::new(2)));
        assert!(!config.is_dev(Snowflake::new(3)));
    }
}
