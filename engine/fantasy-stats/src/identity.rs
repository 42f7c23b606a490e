//! Player identity keys and ids
//!
//! FBref tables share no numeric player id, so the normalized display name is
//! the only join key between the standard table and the secondary tables.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use unicode_normalization::UnicodeNormalization;

/// Range of ids produced by [`player_id`]
pub const PLAYER_ID_RANGE: u64 = 100_000;

/// Normalize a display name into a matching key
///
/// Decomposes accented characters, drops everything outside ASCII, trims and
/// lowercases: `"José"`, `"Jose"` and `" JOSE "` all become `"jose"`.
pub fn normalize_name(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect::<String>().trim().to_lowercase()
}

/// Derive a numeric id from a display name
///
/// The same name always maps to the same id. Different names may collide;
/// ids are a display convenience, not a key.
pub fn player_id(name: &str) -> u32 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    (hasher.finish() % PLAYER_ID_RANGE) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_and_case_fold_together() {
        assert_eq!(normalize_name("José"), "jose");
        assert_eq!(normalize_name("Jose"), "jose");
        assert_eq!(normalize_name(" JOSE "), "jose");
        assert_eq!(normalize_name("José"), normalize_name("Jose"));
    }

    #[test]
    fn test_normalize_full_names() {
        assert_eq!(normalize_name("Vinícius Júnior"), "vinicius junior");
        assert_eq!(normalize_name("Álvaro Morata"), "alvaro morata");
        assert_eq!(normalize_name("Iñaki Williams"), "inaki williams");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_player_id_is_deterministic() {
        let id1 = player_id("Lamine Yamal");
        let id2 = player_id("Lamine Yamal");
        assert_eq!(id1, id2);
        assert!(u64::from(id1) < PLAYER_ID_RANGE);
    }

    #[test]
    fn test_player_id_range() {
        for i in 0..1000 {
            let name = format!("Player{i}");
            let id = player_id(&name);
            assert!(u64::from(id) < PLAYER_ID_RANGE, "Player id {id} is out of range for {name}");
        }
    }
}
