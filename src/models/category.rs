use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A quest tier. The set is closed; tiers cannot be added at runtime.
///
/// - `Penalty`: completing the quest subtracts its XP (clamped at zero)
/// - `Daily`, `Weekly`, `Epic`, `Legendary`: completing the quest grants its XP
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Penalty,
    Daily,
    Weekly,
    Epic,
    Legendary,
}

/// Returned when a string does not name one of the five tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quest category '{0}' (expected penalty, daily, weekly, epic or legendary)")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All tiers, in display order.
    pub const ALL: [Category; 5] = [
        Self::Penalty,
        Self::Daily,
        Self::Weekly,
        Self::Epic,
        Self::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Penalty => "penalty",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Penalty => "Penalty Quests",
            Self::Daily => "Daily Quests",
            Self::Weekly => "Weekly Quests",
            Self::Epic => "Epic Quests",
            Self::Legendary => "Legendary Quests",
        }
    }

    pub fn is_penalty(&self) -> bool {
        matches!(self, Self::Penalty)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "penalty" => Ok(Self::Penalty),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tier_by_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parsing_and_deserializing_agree_on_exact_names() {
        for input in ["Weekly", " weekly", "WEEKLY"] {
            assert!(input.parse::<Category>().is_err(), "parsed {input:?}");
            let json = serde_json::to_string(input).unwrap();
            assert!(serde_json::from_str::<Category>(&json).is_err(), "deserialized {input:?}");
        }
        let parsed: Category = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, Category::Weekly);
    }

    #[test]
    fn rejects_unknown_tier() {
        let err = "mythic".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseCategoryError("mythic".to_string()));
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&Category::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
    }
}
