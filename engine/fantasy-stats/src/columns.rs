//! Column aliases per statistic
//!
//! FBref has renamed columns between seasons, so each field lists the labels
//! it accepts in priority order.

use fbref_scraper::TableRow;

use crate::coerce::coerce_int;

pub const PLAYER: &str = "Player";
pub const POSITION: &str = "Pos";
pub const SQUAD: &str = "Squad";

// Standard stats
pub const GOALS: &[&str] = &["Gls", "Goals"];
pub const ASSISTS: &[&str] = &["Ast", "Assists"];
pub const YELLOW_CARDS: &[&str] = &["CrdY"];
pub const RED_CARDS: &[&str] = &["CrdR"];
pub const OWN_GOALS: &[&str] = &["OG"];
pub const PENALTIES_MISSED: &[&str] = &["PKmiss", "PKM"];
pub const SHOTS_ON_TARGET: &[&str] = &["SoT"];

// Goalkeeping
pub const CLEAN_SHEETS: &[&str] = &["CS"];
pub const SAVES: &[&str] = &["Saves"];
pub const PENALTY_SAVES: &[&str] = &["PKsv"];
pub const GOALS_CONCEDED: &[&str] = &["GA"];

// Defensive actions
pub const TACKLES_WON: &[&str] = &["TklW"];
pub const INTERCEPTIONS: &[&str] = &["Int"];

// Passing; penalty-area passes stand in for big chances created
pub const KEY_PASSES: &[&str] = &["KP"];
pub const BIG_CHANCES_CREATED: &[&str] = &["PPA"];

/// Resolve a statistic from the first alias the row has, coerced to an integer
pub fn resolve(row: &TableRow<'_>, aliases: &[&str]) -> i64 {
    aliases
        .iter()
        .find(|alias| row.contains(alias))
        .map(|alias| coerce_int(row.get(alias)))
        .unwrap_or(0)
}

/// Trimmed text of a column, if present
pub fn text<'a>(row: &TableRow<'a>, column: &str) -> Option<&'a str> {
    row.get(column).map(str::trim)
}
