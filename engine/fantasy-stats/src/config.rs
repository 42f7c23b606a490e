//! Pipeline configuration
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file,
//! `FBREF_*` environment variables, then command line flags.

use config::{Config, Environment, File};
use fbref_scraper::ScraperConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};
use crate::position::PositionMap;

/// Main pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pages holding the four source tables
    pub sources: SourceUrls,

    /// Document metadata
    pub document: DocumentConfig,

    /// Where the document is written
    pub output_path: PathBuf,

    /// HTTP settings
    pub scraper: ScraperConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Position tag lookup
    #[serde(skip)]
    pub positions: PositionMap,
}

/// FBref page URLs for each table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceUrls {
    /// Standard stats; the only table that creates players
    pub standard: String,
    pub goalkeeping: String,
    pub defensive: String,
    pub passing: String,
}

/// Metadata stamped on the output document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Season label (e.g., "2024-25")
    pub season: String,
    pub league: String,
    pub source: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, pretty, json)
    pub format: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sources: SourceUrls::default(),
            document: DocumentConfig::default(),
            output_path: PathBuf::from("data/laliga-stats.json"),
            scraper: ScraperConfig::default(),
            logging: LoggingConfig::default(),
            positions: PositionMap::default(),
        }
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            standard: "https://fbref.com/en/comps/12/stats/La-Liga-Stats".to_string(),
            goalkeeping: "https://fbref.com/en/comps/12/keepers/La-Liga-Stats".to_string(),
            defensive: "https://fbref.com/en/comps/12/defense/La-Liga-Stats".to_string(),
            passing: "https://fbref.com/en/comps/12/passing/La-Liga-Stats".to_string(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            season: "2024-25".to_string(),
            league: "La Liga".to_string(),
            source: "FBref.com".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

impl SourceUrls {
    /// All URLs with their table names
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("standard", self.standard.as_str()),
            ("goalkeeping", self.goalkeeping.as_str()),
            ("defensive", self.defensive.as_str()),
            ("passing", self.passing.as_str()),
        ]
        .into_iter()
    }
}

impl PipelineConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// A missing file is not an error; environment variables use the
    /// `FBREF_` prefix with `__` between sections, e.g. `FBREF_DOCUMENT__SEASON`.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            tracing::debug!("Loading configuration from file: {:?}", path);
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("FBREF").prefix_separator("_").separator("__"))
            .build()
            .map_err(|e| PipelineError::config(e.to_string()))?;

        let config: PipelineConfig =
            settings.try_deserialize().map_err(|e| PipelineError::config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in self.sources.iter() {
            if url.trim().is_empty() {
                return Err(PipelineError::config(format!("{name} URL must not be empty")));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(PipelineError::config("output_path must not be empty"));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(PipelineError::config(format!("Invalid log level: {other}"))),
        }

        match self.logging.format.as_str() {
            "compact" | "pretty" | "json" => {}
            other => return Err(PipelineError::config(format!("Invalid log format: {other}"))),
        }

        self.scraper.validate().map_err(PipelineError::Config)
    }
}
