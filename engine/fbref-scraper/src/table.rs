//! Table reducer
//!
//! The player table is assumed to be the largest table on a page; the squad
//! summaries and injected tables around it are always smaller.

use crate::types::StatTable;

/// Column holding the player's display name
pub const PLAYER_COLUMN: &str = "Player";

/// Pick the player table out of a page's candidates and clean it up
///
/// Returns `None` only when there are no candidates at all.
pub fn reduce(tables: Vec<StatTable>) -> Option<StatTable> {
    let table = select_largest(tables)?;
    let table = strip_repeated_headers(table);
    Some(strip_placeholder_players(table))
}

/// Select the table with the most rows; ties go to the earliest table
pub fn select_largest(tables: Vec<StatTable>) -> Option<StatTable> {
    tables.into_iter().fold(None, |best, table| match best {
        Some(current) if current.len() >= table.len() => Some(current),
        _ => Some(table),
    })
}

/// Drop header rows repeated inside the table body
pub fn strip_repeated_headers(mut table: StatTable) -> StatTable {
    let Some(label) = table.headers.first().cloned() else {
        return table;
    };

    table.rows.retain(|row| row.first().map(String::as_str) != Some(label.as_str()));
    table
}

/// Drop rows without a usable player name, if the table has a player column
pub fn strip_placeholder_players(mut table: StatTable) -> StatTable {
    let Some(index) = table.column_index(PLAYER_COLUMN) else {
        return table;
    };

    table.rows.retain(|row| {
        let name = row[index].trim();
        !name.is_empty() && name != PLAYER_COLUMN
    });
    table
}
