//! Pipeline driver
//!
//! Stages run strictly in order: fetch the standard table (fatal on failure),
//! seed records, fetch and merge each secondary table (skipped on failure),
//! score, sort, persist.

use chrono::{DateTime, Utc};
use fbref_scraper::{fetch_reduced, TableSource};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::merge::{PlayerBook, SecondarySource};
use crate::output::write_document;
use crate::scoring::score;
use crate::types::{PlayerStats, ScoredPlayer, StatsDocument};

/// Number of players shown in the progress summary
pub const SUMMARY_SIZE: usize = 5;

/// Fetches, merges and scores one league's player tables
pub struct StatsPipeline<S> {
    source: S,
    config: PipelineConfig,
}

impl<S: TableSource> StatsPipeline<S> {
    /// Create a new pipeline over a table source
    pub fn new(source: S, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    /// Get the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the table source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the scored document without writing it
    pub async fn run(&self) -> Result<StatsDocument> {
        let meta = &self.config.document;
        info!("Fetching {} stats from {}...", meta.league, meta.source);

        let mut book = self.seed_standard().await?;

        for source in SecondarySource::ALL {
            self.merge_secondary(&mut book, source).await;
        }

        let players = rank(book.into_records());
        info!("Total players: {}", players.len());

        Ok(StatsDocument {
            updated_at: timestamp(Utc::now()),
            season: meta.season.clone(),
            league: meta.league.clone(),
            source: meta.source.clone(),
            players,
        })
    }

    /// Build the document and write it to the configured output path
    pub async fn run_to_file(&self) -> Result<StatsDocument> {
        let document = self.run().await?;

        info!("Top {} by points:", SUMMARY_SIZE);
        for player in document.top_players(SUMMARY_SIZE) {
            info!(
                "  {} ({}, {}) - {} pts",
                player.stats.name, player.stats.club, player.stats.pos, player.points
            );
        }

        write_document(&self.config.output_path, &document)?;
        Ok(document)
    }

    async fn seed_standard(&self) -> Result<PlayerBook> {
        let url = &self.config.sources.standard;

        let table =
            fetch_reduced(&self.source, url).await.map_err(PipelineError::PrimaryUnavailable)?;

        let mut book = PlayerBook::new();
        book.seed(&table, &self.config.positions);

        if book.is_empty() {
            return Err(PipelineError::EmptyPrimary { url: url.clone() });
        }

        info!("Standard stats: {} players", book.len());
        Ok(book)
    }

    async fn merge_secondary(&self, book: &mut PlayerBook, source: SecondarySource) {
        let url = self.secondary_url(source);

        match fetch_reduced(&self.source, url).await {
            Ok(table) => {
                let stats = book.enrich(&table, source);
                info!(
                    "Merged {} stats: {} matched, {} not in standard stats",
                    source, stats.matched, stats.skipped
                );
            }
            Err(e) => {
                warn!("Skipping {} stats, fields stay at 0: {}", source, e);
            }
        }
    }

    fn secondary_url(&self, source: SecondarySource) -> &str {
        match source {
            SecondarySource::Goalkeeping => &self.config.sources.goalkeeping,
            SecondarySource::Defensive => &self.config.sources.defensive,
            SecondarySource::Passing => &self.config.sources.passing,
        }
    }
}

/// Score records and sort them by points, highest first
///
/// The sort is stable: players on equal points keep their merge order.
pub fn rank(records: Vec<PlayerStats>) -> Vec<ScoredPlayer> {
    let mut players: Vec<ScoredPlayer> = records.into_iter().map(score).collect();
    players.sort_by(|a, b| b.points.cmp(&a.points));
    players
}

/// Format a UTC instant as ISO-8601 with microseconds and a trailing `Z`
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use chrono::TimeZone;

    fn record(name: &str, pos: Position, goals: i64) -> PlayerStats {
        let mut stats = PlayerStats::new(0, name.to_string(), "Club".to_string(), pos);
        stats.goals = goals;
        stats
    }

    #[test]
    fn test_rank_sorts_descending() {
        let players = rank(vec![
            record("A", Position::Forward, 1),
            record("B", Position::Defender, 2),
            record("C", Position::Midfielder, 0),
        ]);

        let points: Vec<i64> = players.iter().map(|p| p.points).collect();
        assert_eq!(points, vec![12, 4, 0]);
        assert_eq!(players[0].stats.name, "B");
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        // 5 points each: MID goal, FWD goal plus a shot on target
        let mut forward = record("Forward", Position::Forward, 1);
        forward.shots_on_target = 1;
        let players = rank(vec![
            record("Early", Position::Midfielder, 1),
            record("Zero", Position::Goalkeeper, 0),
            forward,
            record("Late", Position::Midfielder, 1),
        ]);

        let names: Vec<&str> = players.iter().map(|p| p.stats.name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Forward", "Late", "Zero"]);
    }

    #[test]
    fn test_timestamp_format() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 9, 6, 5, 4).unwrap();
        assert_eq!(timestamp(instant), "2025-03-09T06:05:04.000000Z");
    }
}
