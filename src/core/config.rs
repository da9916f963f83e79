//! # Configuration
//!
//! Timing and logging knobs with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jedi-quiz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Quiz content is compiled in and cannot be configured.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::convert::parse_decimal;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub quiz: QuizSection,
    #[serde(default)]
    pub menu: MenuSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizSection {
    pub time_limit_secs: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuSection {
    pub pacing_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);
pub const DEFAULT_PACING: Duration = Duration::from_millis(1000);
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "jedi-quiz.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub time_limit: Duration,
    pub pacing: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub time_limit: Option<Duration>,
    pub pacing_ms: Option<u64>,
    pub log_level: Option<LevelFilter>,
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

/// Returns the path to `~/.jedi-quiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jedi-quiz").join("config.toml"))
}

/// Load config from `~/.jedi-quiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Jedi Quiz Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [quiz]
# time_limit_secs = 30               # Or set JEDI_QUIZ_TIME_LIMIT env var

# [menu]
# pacing_ms = 1000                   # Delay between Jedi Code lines

# [logging]
# level = "info"                     # Or set JEDI_QUIZ_LOG_LEVEL env var
# file = "jedi-quiz.log"
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

/// Parses a positive number of seconds, e.g. `"30"` or `"2.5"`.
pub fn parse_time_limit(text: &str) -> Result<Duration, String> {
    let secs = parse_decimal(text).map_err(|e| format!("{text:?}: {e}"))?;
    seconds_to_duration(secs)
        .ok_or_else(|| format!("{text:?}: time limit must be at least one nanosecond"))
}

/// Converts seconds to a non-zero `Duration`. Values that round down to
/// zero would be rejected by the timer, so they are refused here.
fn seconds_to_duration(secs: f64) -> Option<Duration> {
    if !(secs.is_finite() && secs > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|limit| !limit.is_zero())
}

/// Parses a log level name such as `"debug"` or `"off"`.
pub fn parse_log_level(text: &str) -> Result<LevelFilter, String> {
    text.parse()
        .map_err(|_| format!("{text:?} is not a log level"))
}

fn parse_level(text: &str) -> Option<LevelFilter> {
    parse_log_level(text).ok()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &QuizConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Time limit: CLI → env → config → default
    let time_limit = cli
        .time_limit
        .or_else(|| {
            env("JEDI_QUIZ_TIME_LIMIT").and_then(|v| match parse_time_limit(&v) {
                Ok(d) => Some(d),
                Err(e) => {
                    warn!("Ignoring JEDI_QUIZ_TIME_LIMIT: {}", e);
                    None
                }
            })
        })
        .or_else(|| {
            config.quiz.time_limit_secs.and_then(|secs| {
                let limit = seconds_to_duration(secs);
                if limit.is_none() {
                    warn!("Ignoring quiz.time_limit_secs = {}", secs);
                }
                limit
            })
        })
        .unwrap_or(DEFAULT_TIME_LIMIT);

    // Pacing: CLI → config → default
    let pacing = cli
        .pacing_ms
        .or(config.menu.pacing_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_PACING);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env("JEDI_QUIZ_LOG_LEVEL").as_deref().and_then(parse_level))
        .or_else(|| config.logging.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    ResolvedConfig {
        time_limit,
        pacing,
        log_level,
        log_file,
    }
}
