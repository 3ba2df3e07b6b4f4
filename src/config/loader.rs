//! Configuration file loading with precedence handling.

use crate::layout::{BreakpointTable, FontPair, HeroSpec, LayoutConfig, SectionSpec};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default logical units per terminal column.
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;

/// Default logical units per terminal row.
pub const DEFAULT_CELL_HEIGHT: f64 = 16.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is outside its valid range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted key of the offending value, e.g. `layout.skills.columns`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Logical units per terminal column.
    #[serde(default)]
    pub cell_width: Option<f64>,

    /// Logical units per terminal row.
    #[serde(default)]
    pub cell_height: Option<f64>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Portfolio content file replacing the built-in content.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Breakpoint and sizing overrides.
    #[serde(default)]
    pub layout: Option<LayoutSection>,
}

/// `[layout]` table.
///
/// ```toml
/// [layout]
/// footer_compact_threshold = 700
///
/// [layout.skills]
/// columns = [[1400, 4], [900, 2], [0, 1]]
/// min_card_width = 260
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    #[serde(default)]
    pub footer_compact_threshold: Option<f64>,
    #[serde(default)]
    pub hero: Option<HeroSection>,
    #[serde(default)]
    pub skills: Option<GridSectionConfig>,
    #[serde(default)]
    pub contacts: Option<GridSectionConfig>,
}

/// `[layout.hero]` table. Pairs are `[compact, wide]`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HeroSection {
    #[serde(default)]
    pub compact_threshold: Option<f64>,
    #[serde(default)]
    pub heading: Option<(f64, f64)>,
    #[serde(default)]
    pub subtitle: Option<(f64, f64)>,
    #[serde(default)]
    pub body: Option<(f64, f64)>,
    #[serde(default)]
    pub actions_per_row: Option<(usize, usize)>,
}

/// `[layout.skills]` / `[layout.contacts]` tables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GridSectionConfig {
    /// `[[min_width, columns], ...]`, strictly descending.
    #[serde(default)]
    pub columns: Option<Vec<(f64, usize)>>,
    #[serde(default)]
    pub gap: Option<f64>,
    #[serde(default)]
    pub min_card_width: Option<f64>,
    #[serde(default)]
    pub compact_threshold: Option<f64>,
    #[serde(default)]
    pub heading: Option<(f64, f64)>,
    #[serde(default)]
    pub body: Option<(f64, f64)>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Logical units per terminal column.
    pub cell_width: f64,
    /// Logical units per terminal row.
    pub cell_height: f64,
    /// Colors disabled.
    pub no_color: bool,
    /// Content file, `None` for the built-in portfolio.
    pub content_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Breakpoints, floors and font tiers.
    pub layout: LayoutConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            no_color: false,
            content_path: None,
            log_file_path: default_log_path(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when a cell size is not positive, a
/// column table is malformed or resolves to zero columns.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let cell_width = config.cell_width.unwrap_or(defaults.cell_width);
    validate_positive("cell_width", cell_width)?;
    let cell_height = config.cell_height.unwrap_or(defaults.cell_height);
    validate_positive("cell_height", cell_height)?;

    let layout = match config.layout {
        Some(section) => merge_layout(section, defaults.layout)?,
        None => defaults.layout,
    };

    Ok(ResolvedConfig {
        cell_width,
        cell_height,
        no_color: config.no_color.unwrap_or(defaults.no_color),
        content_path: config.content_path.or(defaults.content_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        layout,
    })
}

fn merge_layout(section: LayoutSection, defaults: LayoutConfig) -> Result<LayoutConfig, ConfigError> {
    let footer_compact_threshold = section
        .footer_compact_threshold
        .unwrap_or(defaults.footer_compact_threshold);
    validate_non_negative("layout.footer_compact_threshold", footer_compact_threshold)?;

    let hero = match section.hero {
        Some(hero) => merge_hero(hero, defaults.hero)?,
        None => defaults.hero,
    };
    let skills = match section.skills {
        Some(grid) => merge_grid("layout.skills", grid, defaults.skills)?,
        None => defaults.skills,
    };
    let contacts = match section.contacts {
        Some(grid) => merge_grid("layout.contacts", grid, defaults.contacts)?,
        None => defaults.contacts,
    };

    Ok(LayoutConfig {
        hero,
        skills,
        contacts,
        footer_compact_threshold,
    })
}

fn merge_hero(hero: HeroSection, defaults: HeroSpec) -> Result<HeroSpec, ConfigError> {
    let compact_threshold = hero.compact_threshold.unwrap_or(defaults.compact_threshold);
    validate_non_negative("layout.hero.compact_threshold", compact_threshold)?;

    let actions_per_row = hero.actions_per_row.unwrap_or(defaults.actions_per_row);
    if actions_per_row.0 == 0 || actions_per_row.1 == 0 {
        return Err(ConfigError::InvalidValue {
            field: "layout.hero.actions_per_row".to_string(),
            reason: "buttons per row must be at least 1".to_string(),
        });
    }

    Ok(HeroSpec {
        compact_threshold,
        heading: pair_or(hero.heading, defaults.heading),
        subtitle: pair_or(hero.subtitle, defaults.subtitle),
        body: pair_or(hero.body, defaults.body),
        actions_per_row,
    })
}

fn merge_grid(
    field: &str,
    grid: GridSectionConfig,
    defaults: SectionSpec,
) -> Result<SectionSpec, ConfigError> {
    let columns = match grid.columns {
        Some(entries) => {
            if entries.iter().any(|(_, columns)| *columns == 0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("{field}.columns"),
                    reason: "column count must be at least 1".to_string(),
                });
            }
            BreakpointTable::try_new(entries).map_err(|e| ConfigError::InvalidValue {
                field: format!("{field}.columns"),
                reason: e.to_string(),
            })?
        }
        None => defaults.columns,
    };

    let gap = grid.gap.unwrap_or(defaults.gap);
    validate_non_negative(&format!("{field}.gap"), gap)?;
    let min_card_width = grid.min_card_width.unwrap_or(defaults.min_card_width);
    validate_non_negative(&format!("{field}.min_card_width"), min_card_width)?;
    let compact_threshold = grid.compact_threshold.unwrap_or(defaults.compact_threshold);
    validate_non_negative(&format!("{field}.compact_threshold"), compact_threshold)?;

    Ok(SectionSpec {
        columns,
        gap,
        min_card_width,
        compact_threshold,
        heading: pair_or(grid.heading, defaults.heading),
        body: pair_or(grid.body, defaults.body),
    })
}

fn pair_or(pair: Option<(f64, f64)>, default: FontPair) -> FontPair {
    pair.map(|(compact, wide)| FontPair::new(compact, wide))
        .unwrap_or(default)
}

fn validate_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn validate_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be a non-negative number, got {value}"),
        })
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_CELL_WIDTH`: logical units per column
/// - `FOLIO_CONTENT`: content file path
///
/// # Errors
///
/// `InvalidValue` if `FOLIO_CELL_WIDTH` is not a positive number. This runs
/// before logging is initialized, so the error goes back to the caller.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var("FOLIO_CELL_WIDTH") {
        let width = raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
            field: "FOLIO_CELL_WIDTH".to_string(),
            reason: format!("expected a number, got {raw:?}"),
        })?;
        validate_positive("FOLIO_CELL_WIDTH", width)?;
        config.cell_width = width;
    }

    if let Ok(path) = std::env::var("FOLIO_CONTENT") {
        config.content_path = Some(PathBuf::from(path));
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    cell_width_override: Option<f64>,
    content_override: Option<PathBuf>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(cell_width) = cell_width_override {
        config.cell_width = cell_width;
    }

    if let Some(path) = content_override {
        config.content_path = Some(path);
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
