//! # Fantasy Stats
//!
//! Merges the four FBref player tables of a league (standard, goalkeeping,
//! defensive, passing) into one record per player, scores each record with a
//! position-dependent fantasy formula and persists the ranked list as JSON.
//!
//! Players are joined across tables by their normalized display name. Only
//! the standard table creates records; the others fill in their own fields.

pub mod coerce;
pub mod columns;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod position;
pub mod scoring;
pub mod types;


pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use logging::initialize_logging;
pub use merge::{PlayerBook, SecondarySource};
pub use pipeline::StatsPipeline;
pub use position::{Position, PositionMap};
pub use types::{PlayerStats, ScoredPlayer, StatsDocument};

/// Re-export the table source seam
pub use fbref_scraper::{FbrefScraper, StatTable, TableSource};
