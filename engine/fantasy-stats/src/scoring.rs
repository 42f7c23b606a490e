//! Fantasy points
//!
//! | pos | additions |
//! |-----|-----------|
//! | GK  | clean sheets x4, saves / 3, penalty saves x5, minus goals conceded / 2 |
//! | DEF | goals x6, assists x3, clean sheets x4, tackles won, interceptions |
//! | MID | goals x5, assists x3, clean sheets, key passes, shots on target, big chances created |
//! | FWD | goals x4, assists x3, shots on target, big chances created |
//!
//! Every position then loses 1 per yellow card, 3 per red card, 2 per own goal
//! and 2 per missed penalty. Divisions round toward negative infinity.

use crate::position::Position;
use crate::types::{PlayerStats, ScoredPlayer};

/// Compute a player's fantasy points
///
/// Arithmetic saturates, so an absurdly large cell pins the total at the
/// `i64` bounds instead of overflowing.
pub fn fantasy_points(p: &PlayerStats) -> i64 {
    let positional = match p.pos {
        Position::Goalkeeper => weighted_sum(&[
            (p.clean_sheets, 4),
            (p.saves.div_euclid(3), 1),
            (p.penalty_saves, 5),
            (p.goals_conceded.div_euclid(2), -1),
        ]),
        Position::Defender => weighted_sum(&[
            (p.goals, 6),
            (p.assists, 3),
            (p.clean_sheets, 4),
            (p.tackles_won, 1),
            (p.interceptions, 1),
        ]),
        Position::Midfielder => weighted_sum(&[
            (p.goals, 5),
            (p.assists, 3),
            (p.clean_sheets, 1),
            (p.key_passes, 1),
            (p.shots_on_target, 1),
            (p.big_chances_created, 1),
        ]),
        Position::Forward => weighted_sum(&[
            (p.goals, 4),
            (p.assists, 3),
            (p.shots_on_target, 1),
            (p.big_chances_created, 1),
        ]),
    };

    let penalties = weighted_sum(&[
        (p.yellow_cards, 1),
        (p.red_cards, 3),
        (p.own_goals, 2),
        (p.penalties_missed, 2),
    ]);

    positional.saturating_sub(penalties)
}

fn weighted_sum(terms: &[(i64, i64)]) -> i64 {
    terms
        .iter()
        .fold(0i64, |total, &(value, weight)| total.saturating_add(value.saturating_mul(weight)))
}

/// Attach fantasy points to a merged record
pub fn score(stats: PlayerStats) -> ScoredPlayer {
    let points = fantasy_points(&stats);
    ScoredPlayer { stats, points }
}
