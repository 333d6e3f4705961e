// Configuration loading and parsing (config/h2hstats.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the run configuration inside `config/` and `defaults/`.
pub const CONFIG_FILE_NAME: &str = "h2hstats.toml";

/// Largest number of decimal places a Decimal can carry.
const MAX_DECIMAL_PLACES: u32 = 28;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// The assembled, validated run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueSection,
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueSection {
    /// Path to the league JSON file, relative to the base directory unless absolute.
    pub path: PathBuf,
}

/// Whether statistics are computed for one season or across seasons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    #[default]
    Year,
    AllTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeConfig {
    #[serde(default)]
    pub kind: ScopeKind,
    /// Season for year scope. Defaults to the league's most recent season.
    #[serde(default)]
    pub year: Option<u32>,
}

/// Raw filter flags as written in the config file. The engine resolves and
/// validates them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub only_regular_season: bool,
    #[serde(default)]
    pub only_post_season: bool,
    #[serde(default)]
    pub only_championship: bool,
    #[serde(default)]
    pub week_number_start: Option<u32>,
    #[serde(default)]
    pub week_number_end: Option<u32>,
    #[serde(default)]
    pub year_number_start: Option<u32>,
    #[serde(default)]
    pub year_number_end: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Statistic names, in column order.
    #[serde(default = "default_stats")]
    pub stats: Vec<String>,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            stats: default_stats(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_stats() -> Vec<String> {
    ["games_played", "wal", "awal", "points_scored", "team_luck"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_decimal_places() -> u32 {
    4
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate config text. `path` only labels errors.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load a config file from an explicit path. Relative league paths are
/// resolved against the config file's grandparent (the base directory).
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let text = read_file(path)?;
    let mut config = parse_config(&text, path)?;
    if config.league.path.is_relative() {
        let base = path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        config.league.path = base.join(&config.league.path);
    }
    Ok(config)
}

/// Load `config/h2hstats.toml` relative to `base_dir`, without copying defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    load_config_file(&base_dir.join("config").join(CONFIG_FILE_NAME))
}

/// Copy `defaults/h2hstats.toml` into `config/` when the latter is missing.
/// Returns the copied path, or `None` if nothing needed copying.
pub fn ensure_config_files(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let source = base_dir.join("defaults").join(CONFIG_FILE_NAME);
    let config_dir = base_dir.join("config");
    let target = config_dir.join(CONFIG_FILE_NAME);

    if target.exists() {
        return Ok(None);
    }
    if !source.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither defaults/{name} nor config/{name} found in {}; \
                 run from the project root or pass --config",
                base_dir.display(),
                name = CONFIG_FILE_NAME
            ),
        });
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", source.display(), target.display()),
    })?;

    Ok(Some(target))
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures the default config file is copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.league.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "league.path".into(),
            message: "must not be empty".into(),
        });
    }

    if config.output.stats.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "output.stats".into(),
            message: "must name at least one statistic".into(),
        });
    }

    if config.output.decimal_places > MAX_DECIMAL_PLACES {
        return Err(ConfigError::ValidationError {
            field: "output.decimal_places".into(),
            message: format!(
                "must be at most {MAX_DECIMAL_PLACES}, got {}",
                config.output.decimal_places
            ),
        });
    }

    let f = &config.filters;
    if config.scope.kind == ScopeKind::Year
        && (f.year_number_start.is_some() || f.year_number_end.is_some())
    {
        return Err(ConfigError::ValidationError {
            field: "filters.year_number_start".into(),
            message: "year bounds only apply to all_time scope; use scope.year".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
