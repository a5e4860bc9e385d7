//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.miniline/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MinilineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub prompt: Option<String>,
    pub bell: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_BELL: bool = true;
pub const DEFAULT_LOG_FILE: &str = "miniline.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub bell: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub prompt: Option<&'a str>,
    pub no_bell: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.miniline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".miniline").join("config.toml"))
}

/// Load config from `~/.miniline/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MinilineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MinilineConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(MinilineConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MinilineConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(MinilineConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MinilineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Miniline Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# prompt = "> "                      # Or set MINILINE_PROMPT env var
# bell = true                        # Beep on unrecognized escape sequences (MINILINE_BELL)

# [logging]
# file = "miniline.log"
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace" (MINILINE_LOG_LEVEL)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MinilineConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Prompt: CLI → env → config → default
    let prompt = cli
        .prompt
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MINILINE_PROMPT").ok())
        .or_else(|| config.general.prompt.clone())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    // Bell: --no-bell → env → config → default
    let bell = if cli.no_bell {
        false
    } else {
        std::env::var("MINILINE_BELL")
            .ok()
            .and_then(|v| parse_bool(&v))
            .or(config.general.bell)
            .unwrap_or(DEFAULT_BELL)
    };

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default; unknown names fall back with a warning
    let log_level = std::env::var("MINILINE_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .map(|name| {
            LevelFilter::from_str(&name).unwrap_or_else(|_| {
                warn!("Unknown log level {:?}, using {}", name, DEFAULT_LOG_LEVEL);
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        prompt,
        bell,
        log_file,
        log_level,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unrecognized boolean {:?}", value);
            None
        }
    }
}
