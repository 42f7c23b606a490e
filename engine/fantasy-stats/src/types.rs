use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A player's merged statistics, before scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Hash of the display name; not guaranteed unique
    pub id: u32,
    /// Display name as it appears in the standard table
    pub name: String,
    /// Club name
    pub club: String,
    /// Fantasy role, assigned from the standard table only
    pub pos: Position,

    // Standard stats
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub own_goals: i64,
    pub penalties_missed: i64,
    pub shots_on_target: i64,

    // Goalkeeping
    pub clean_sheets: i64,
    pub saves: i64,
    pub penalty_saves: i64,
    pub goals_conceded: i64,

    // Defensive actions
    pub tackles_won: i64,
    pub interceptions: i64,

    // Passing
    pub key_passes: i64,
    pub big_chances_created: i64,

    /// Man of the match awards; no source table carries these
    pub motm: i64,
}

impl PlayerStats {
    /// Create a record with every statistic at zero
    pub fn new(id: u32, name: String, club: String, pos: Position) -> Self {
        Self {
            id,
            name,
            club,
            pos,
            goals: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
            own_goals: 0,
            penalties_missed: 0,
            shots_on_target: 0,
            clean_sheets: 0,
            saves: 0,
            penalty_saves: 0,
            goals_conceded: 0,
            tackles_won: 0,
            interceptions: 0,
            key_passes: 0,
            big_chances_created: 0,
            motm: 0,
        }
    }
}

/// A fully merged record with its fantasy points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub points: i64,
}

/// The persisted statistics document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    /// ISO-8601 UTC timestamp with a trailing `Z`
    pub updated_at: String,
    pub season: String,
    pub league: String,
    pub source: String,
    /// Players sorted by points, highest first
    pub players: Vec<ScoredPlayer>,
}

impl StatsDocument {
    /// Get top N players by points
    pub fn top_players(&self, limit: usize) -> &[ScoredPlayer] {
        &self.players[..limit.min(self.players.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_output_format() {
        let mut stats = PlayerStats::new(
            42,
            "Nico Williams".to_string(),
            "Athletic Club".to_string(),
            Position::Forward,
        );
        stats.goals = 5;
        stats.big_chances_created = 12;
        let player = ScoredPlayer { stats, points: 44 };

        let value = serde_json::to_value(&player).unwrap();
        let mut actual: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        let mut expected = vec![
            "id",
            "name",
            "club",
            "pos",
            "goals",
            "assists",
            "yellowCards",
            "redCards",
            "ownGoals",
            "penaltiesMissed",
            "shotsOnTarget",
            "cleanSheets",
            "saves",
            "penaltySaves",
            "goalsConceded",
            "tacklesWon",
            "interceptions",
            "keyPasses",
            "bigChancesCreated",
            "motm",
            "points",
        ];
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        assert_eq!(value["pos"], "FWD");
        assert_eq!(value["bigChancesCreated"], 12);
        assert_eq!(value["points"], 44);
    }

    #[test]
    fn test_field_order_is_preserved_in_json_text() {
        let stats =
            PlayerStats::new(1, "Pedri".to_string(), "Barcelona".to_string(), Position::Midfielder);
        let json = serde_json::to_string(&ScoredPlayer { stats, points: 0 }).unwrap();

        let id = json.find("\"id\"").unwrap();
        let motm = json.find("\"motm\"").unwrap();
        let points = json.find("\"points\"").unwrap();
        assert!(id < motm && motm < points);
    }

    #[test]
    fn test_top_players_limit() {
        let players = (0..3)
            .map(|i| ScoredPlayer {
                stats: PlayerStats::new(i, format!("Player {i}"), "Club".to_string(), Position::Midfielder),
                points: 10 - i64::from(i),
            })
            .collect();
        let document = StatsDocument {
            updated_at: "2025-01-01T00:00:00.000000Z".to_string(),
            season: "2024-25".to_string(),
            league: "La Liga".to_string(),
            source: "FBref.com".to_string(),
            players,
        };

        assert_eq!(document.top_players(5).len(), 3);
        assert_eq!(document.top_players(2).len(), 2);
        assert_eq!(document.top_players(1)[0].points, 10);
    }
}
