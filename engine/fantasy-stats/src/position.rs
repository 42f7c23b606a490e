//! Fantasy positions and the FBref tag classifier

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Coarse fantasy role a player is scored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// Short code used in the output document
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Position code assumed when a table has no `Pos` column
pub const DEFAULT_POSITION_CODE: &str = "MF";

/// Lookup from FBref position tags to fantasy roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMap {
    entries: HashMap<String, Position>,
    fallback: Position,
}

impl Default for PositionMap {
    fn default() -> Self {
        let entries = [
            ("GK", Position::Goalkeeper),
            ("DF", Position::Defender),
            ("DF,MF", Position::Defender),
            ("DF,FW", Position::Defender),
            ("MF", Position::Midfielder),
            ("MF,DF", Position::Midfielder),
            ("MF,FW", Position::Midfielder),
            ("FW", Position::Forward),
            ("FW,MF", Position::Forward),
            ("FW,DF", Position::Forward),
        ]
        .into_iter()
        .map(|(tag, position)| (tag.to_string(), position))
        .collect();

        Self { entries, fallback: Position::Midfielder }
    }
}

impl PositionMap {
    /// Classify a raw position tag such as `"DF,MF"`
    ///
    /// Only the first comma-separated code is considered. Unknown codes fall
    /// back to midfielder.
    pub fn classify(&self, raw: &str) -> Position {
        let code = raw.split(',').next().unwrap_or_default().trim().to_uppercase();
        self.entries.get(&code).copied().unwrap_or(self.fallback)
    }

    /// Number of known tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_first_code() {
        let positions = PositionMap::default();

        assert_eq!(positions.classify("DF,MF"), Position::Defender);
        assert_eq!(positions.classify("FW"), Position::Forward);
        assert_eq!(positions.classify("GK"), Position::Goalkeeper);
        assert_eq!(positions.classify("MF,FW"), Position::Midfielder);
        assert_eq!(positions.classify("fw,mf"), Position::Forward);
        assert_eq!(positions.classify(" DF "), Position::Defender);
    }

    #[test]
    fn test_classify_fallback() {
        let positions = PositionMap::default();

        assert_eq!(positions.classify("XX"), Position::Midfielder);
        assert_eq!(positions.classify(""), Position::Midfielder);
        assert_eq!(positions.classify(DEFAULT_POSITION_CODE), Position::Midfielder);
    }

    #[test]
    fn test_position_codes() {
        assert_eq!(serde_json::to_string(&Position::Defender).unwrap(), "\"DEF\"");
        assert_eq!(Position::Forward.to_string(), "FWD");
        assert_eq!(PositionMap::default().len(), 10);
    }
}
