//! Record merger
//!
//! The standard table seeds one record per normalized name. Secondary tables
//! only enrich records that already exist; a player missing from the standard
//! table is never added.

use fbref_scraper::{StatTable, TableRow};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::columns::{self, resolve};
use crate::identity::{normalize_name, player_id};
use crate::position::{PositionMap, DEFAULT_POSITION_CODE};
use crate::types::PlayerStats;

/// Club recorded when the standard table has no squad for a player
pub const UNKNOWN_CLUB: &str = "Unknown";

/// Secondary FBref tables and the fields each one owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondarySource {
    Goalkeeping,
    Defensive,
    Passing,
}

impl SecondarySource {
    /// All secondary sources, in merge order
    pub const ALL: [SecondarySource; 3] =
        [SecondarySource::Goalkeeping, SecondarySource::Defensive, SecondarySource::Passing];

    /// Overwrite the fields this source owns; everything else is left alone
    pub fn apply(&self, row: &TableRow<'_>, record: &mut PlayerStats) {
        match self {
            SecondarySource::Goalkeeping => {
                record.clean_sheets = resolve(row, columns::CLEAN_SHEETS);
                record.saves = resolve(row, columns::SAVES);
                record.penalty_saves = resolve(row, columns::PENALTY_SAVES);
                record.goals_conceded = resolve(row, columns::GOALS_CONCEDED);
            }
            SecondarySource::Defensive => {
                record.tackles_won = resolve(row, columns::TACKLES_WON);
                record.interceptions = resolve(row, columns::INTERCEPTIONS);
            }
            SecondarySource::Passing => {
                record.key_passes = resolve(row, columns::KEY_PASSES);
                record.big_chances_created = resolve(row, columns::BIG_CHANCES_CREATED);
            }
        }
    }
}

impl fmt::Display for SecondarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SecondarySource::Goalkeeping => "goalkeeping",
            SecondarySource::Defensive => "defensive",
            SecondarySource::Passing => "passing",
        };
        f.write_str(name)
    }
}

/// Outcome of one enrichment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    /// Rows merged into an existing record
    pub matched: usize,
    /// Rows whose player is not in the standard table
    pub skipped: usize,
}

/// Player records keyed by normalized name, in insertion order
#[derive(Debug, Default)]
pub struct PlayerBook {
    records: Vec<PlayerStats>,
    slots: HashMap<String, usize>,
}

impl PlayerBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed records from the standard stats table
    ///
    /// Two names that normalize to the same key share a slot; the later row
    /// replaces the earlier one in place.
    pub fn seed(&mut self, table: &StatTable, positions: &PositionMap) -> usize {
        let mut seeded = 0;

        for row in table.iter_rows() {
            let Some(name) = player_name(&row) else {
                continue;
            };

            let raw_pos = columns::text(&row, columns::POSITION).unwrap_or(DEFAULT_POSITION_CODE);
            let pos = positions.classify(raw_pos);
            let club = columns::text(&row, columns::SQUAD)
                .filter(|club| !club.is_empty())
                .unwrap_or(UNKNOWN_CLUB);

            let mut record = PlayerStats::new(player_id(name), name.to_string(), club.to_string(), pos);
            record.goals = resolve(&row, columns::GOALS);
            record.assists = resolve(&row, columns::ASSISTS);
            record.yellow_cards = resolve(&row, columns::YELLOW_CARDS);
            record.red_cards = resolve(&row, columns::RED_CARDS);
            record.own_goals = resolve(&row, columns::OWN_GOALS);
            record.penalties_missed = resolve(&row, columns::PENALTIES_MISSED);
            record.shots_on_target = resolve(&row, columns::SHOTS_ON_TARGET);

            self.insert(normalize_name(name), record);
            seeded += 1;
        }

        seeded
    }

    /// Merge one secondary table into the existing records
    pub fn enrich(&mut self, table: &StatTable, source: SecondarySource) -> EnrichStats {
        let mut stats = EnrichStats::default();

        for row in table.iter_rows() {
            let Some(name) = player_name(&row) else {
                continue;
            };

            match self.slots.get(&normalize_name(name)) {
                Some(&slot) => {
                    source.apply(&row, &mut self.records[slot]);
                    stats.matched += 1;
                }
                None => {
                    debug!("Skipping {} row for {}: not in standard stats", source, name);
                    stats.skipped += 1;
                }
            }
        }

        stats
    }

    /// Look up a record by display name
    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.slots.get(&normalize_name(name)).map(|&slot| &self.records[slot])
    }

    /// Number of distinct players
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the book, yielding records in insertion order
    pub fn into_records(self) -> Vec<PlayerStats> {
        self.records
    }

    fn insert(&mut self, key: String, record: PlayerStats) {
        match self.slots.get(&key) {
            Some(&slot) => {
                debug!("Identity key '{}' seen twice, keeping {}", key, record.name);
                self.records[slot] = record;
            }
            None => {
                self.slots.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }
}

fn player_name<'a>(row: &TableRow<'a>) -> Option<&'a str> {
    columns::text(row, columns::PLAYER).filter(|name| !name.is_empty() && *name != columns::PLAYER)
}
