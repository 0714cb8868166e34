use crate::types::{
    null_as_default,
    Playlist,
};
use std::collections::HashMap;

/// Stats for every tracked playlist
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Stats {
    /// Lifetime solo stats
    #[serde(rename = "p2", deserialize_with = "null_as_default")]
    pub lifetime_solo: StatsGroup,

    /// Lifetime duo stats
    #[serde(rename = "p10", deserialize_with = "null_as_default")]
    pub lifetime_duo: StatsGroup,

    /// Lifetime squad stats
    #[serde(rename = "p9", deserialize_with = "null_as_default")]
    pub lifetime_squad: StatsGroup,

    /// Current season solo stats
    #[serde(rename = "curr_p2", deserialize_with = "null_as_default")]
    pub current_season_solo: StatsGroup,

    /// Current season duo stats
    #[serde(rename = "curr_p10", deserialize_with = "null_as_default")]
    pub current_season_duo: StatsGroup,

    /// Current season squad stats
    #[serde(rename = "curr_p9", deserialize_with = "null_as_default")]
    pub current_season_squad: StatsGroup,

    /// Unknown playlists
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Stats {
    /// Get the lifetime stats for a playlist
    pub fn lifetime(&self, playlist: Playlist) -> &StatsGroup {
        match playlist {
            Playlist::Solo => &self.lifetime_solo,
            Playlist::Duo => &self.lifetime_duo,
            Playlist::Squad => &self.lifetime_squad,
        }
    }

    /// Get the current season stats for a playlist
    pub fn current_season(&self, playlist: Playlist) -> &StatsGroup {
        match playlist {
            Playlist::Solo => &self.current_season_solo,
            Playlist::Duo => &self.current_season_duo,
            Playlist::Squad => &self.current_season_squad,
        }
    }
}

/// The stats for one playlist
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StatsGroup {
    /// Tracker rating
    #[serde(rename = "trnRating", deserialize_with = "null_as_default")]
    pub trn_rating: Metric,

    #[serde(deserialize_with = "null_as_default")]
    pub score: Metric,

    /// # of wins
    #[serde(deserialize_with = "null_as_default")]
    pub top1: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top3: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top5: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top6: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top10: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top12: Metric,
    #[serde(deserialize_with = "null_as_default")]
    pub top25: Metric,

    /// Kill/death ratio
    #[serde(deserialize_with = "null_as_default")]
    pub kd: Metric,

    /// Win ratio
    #[serde(rename = "wins", deserialize_with = "null_as_default")]
    pub win_ratio: Metric,

    /// # of matches played
    #[serde(deserialize_with = "null_as_default")]
    pub matches: Metric,

    /// # of kills
    #[serde(deserialize_with = "null_as_default")]
    pub kills: Metric,

    /// Kills per game
    #[serde(deserialize_with = "null_as_default")]
    pub kpg: Metric,

    #[serde(rename = "scorePerMatch", deserialize_with = "null_as_default")]
    pub score_per_match: Metric,
}

/// A single statistic.
///
/// Any field the api leaves out, or sends as `null`, is its zero value.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Metric {
    /// Human readable label
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,

    /// Machine field name
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,

    #[serde(deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "valueInt", deserialize_with = "null_as_default")]
    pub value_int: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub percentile: f64,

    /// Formatted value
    #[serde(rename = "displayValue", deserialize_with = "null_as_default")]
    pub display_value: String,
}
