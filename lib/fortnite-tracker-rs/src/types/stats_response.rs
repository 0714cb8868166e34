use crate::types::{
    null_as_default,
    null_items_as_default,
    Playlist,
    Stats,
};
use std::collections::HashMap;

/// The stats for a user profile
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StatsResponse {
    /// Unique account id
    #[serde(rename = "accountId", deserialize_with = "null_as_default")]
    pub account_id: String,

    #[serde(rename = "platformId", deserialize_with = "null_as_default")]
    pub platform_id: i64,

    /// Short platform name, ex: `pc`
    #[serde(rename = "platformName", deserialize_with = "null_as_default")]
    pub platform_name: String,

    /// Long platform name, ex: `PC`
    #[serde(rename = "platformNameLong", deserialize_with = "null_as_default")]
    pub platform_name_long: String,

    /// The user's display name
    #[serde(rename = "epicUserHandle", deserialize_with = "null_as_default")]
    pub epic_user_handle: String,

    /// Per-playlist stats
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Stats,

    /// Recent matches, as ordered by the api
    #[serde(rename = "recentMatches", deserialize_with = "null_items_as_default")]
    pub recent_matches: Vec<Match>,

    /// Flat lifetime stats
    #[serde(rename = "lifetimeStats", deserialize_with = "null_items_as_default")]
    pub lifetime_stats: Vec<LifetimeStat>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl StatsResponse {
    /// Utility function to get a lifetime stat by key. Currently an O(n) linear search.
    pub fn lifetime_stat(&self, key: &str) -> Option<&str> {
        self.lifetime_stats
            .iter()
            .find(|stat| stat.key == key)
            .map(|stat| stat.value.as_str())
    }
}

/// A recent match
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Match {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(rename = "accountId", deserialize_with = "null_as_default")]
    pub account_id: String,

    /// The playlist code
    #[serde(deserialize_with = "null_as_default")]
    pub playlist: String,

    #[serde(deserialize_with = "null_as_default")]
    pub kills: i64,

    #[serde(rename = "minutesPlayed", deserialize_with = "null_as_default")]
    pub minutes_played: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub top1: i64,

    /// The # of matches this record covers
    #[serde(deserialize_with = "null_as_default")]
    pub matches: i64,

    /// When this record was collected, as sent by the api
    #[serde(rename = "dateCollected", deserialize_with = "null_as_default")]
    pub date_collected: String,

    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,

    /// Platform id
    #[serde(deserialize_with = "null_as_default")]
    pub platform: i64,
}

impl Match {
    /// Get the playlist this match was played in, if it is known
    pub fn get_playlist(&self) -> Option<Playlist> {
        Playlist::from_code(&self.playlist)
    }

    /// Get a human readable name for this match's playlist
    pub fn playlist_name(&self) -> &'static str {
        self.get_playlist()
            .map(Playlist::name)
            .unwrap_or("Unknown")
    }
}

/// A lifetime stat.
///
/// Values are always strings, regardless of what they represent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LifetimeStat {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE_1: &str = include_str!("../../test_data/stats_response.json");

    #[test]
    fn parse_sample_1() {
        let data: StatsResponse = serde_json::from_str(SAMPLE_1).unwrap();

        assert_eq!(data.account_id, "4735ce91-32f5-4a8e-bd9a-23d1e5c5b8a0");
        assert_eq!(data.platform_id, 3);
        assert_eq!(data.platform_name, "pc");
        assert_eq!(data.platform_name_long, "PC");
        assert_eq!(data.epic_user_handle, "Ninja");

        let solo = &data.stats.lifetime_solo;
        assert_eq!(solo.kills.value_int, 22_105);
        assert_eq!(solo.kills.display_value, "22,105");
        assert_eq!(solo.trn_rating.label, "TRN Rating");
        assert_eq!(solo.kd.value, "9.82");
        assert_eq!(solo.win_ratio.field, "WinRatio");
        assert_eq!(solo.kpg.value_int, 0);
        assert_eq!(solo.kpg.display_value, "4.36");
        assert_eq!(data.stats.lifetime_duo.kills.value_int, 12_432);
        assert_eq!(data.stats.lifetime_squad.kills.value_int, 30_987);
        assert_eq!(data.stats.current_season_squad.matches.value_int, 102);

        // Missing playlist
        assert_eq!(data.stats.current_season_duo.kills.value_int, 0);

        assert_eq!(data.recent_matches.len(), 2);
        assert_eq!(data.recent_matches[0].playlist_name(), "Squad");
        assert_eq!(data.recent_matches[0].minutes_played, 28);
        assert_eq!(data.recent_matches[1].playlist_name(), "Solo");

        assert_eq!(data.lifetime_stat("Wins"), Some("3,152"));
        assert_eq!(data.lifetime_stat("Not a stat"), None);
        assert!(data.unknown.contains_key("avatar"));
    }

    #[test]
    fn parse_minimal() {
        let data: StatsResponse = serde_json::from_str(
            r#"{"epicUserHandle":"ninja","stats":{"p2":{"kills":{"valueInt":100}}}}"#,
        )
        .unwrap();

        assert_eq!(data.epic_user_handle, "ninja");
        assert_eq!(data.stats.lifetime_solo.kills.value_int, 100);
        assert!(data.account_id.is_empty());
        assert!(data.recent_matches.is_empty());
        assert!(data.lifetime_stats.is_empty());
    }

    #[test]
    fn parse_empty_object() {
        let data: StatsResponse = serde_json::from_str("{}").unwrap();
        assert!(data.epic_user_handle.is_empty());
        assert_eq!(data.stats.lifetime_squad.kills.value_int, 0);
    }

    #[test]
    fn parse_nulls() {
        let data: StatsResponse = serde_json::from_str(
            r#"{
                "accountId": null,
                "platformId": null,
                "epicUserHandle": "ninja",
                "stats": null,
                "recentMatches": null,
                "lifetimeStats": null
            }"#,
        )
        .unwrap();
        assert_eq!(data.epic_user_handle, "ninja");
        assert!(data.account_id.is_empty());
        assert_eq!(data.platform_id, 0);
        assert_eq!(data.stats.lifetime_solo.kills.value_int, 0);
        assert!(data.recent_matches.is_empty());
        assert!(data.lifetime_stats.is_empty());

        let data: StatsResponse = serde_json::from_str(
            r#"{
                "stats": {
                    "p2": null,
                    "p9": { "kills": null, "matches": { "valueInt": 3 } }
                },
                "recentMatches": [
                    { "id": null, "playlist": "p9", "kills": null, "dateCollected": null },
                    null
                ],
                "lifetimeStats": [{ "key": "Wins", "value": null }, null]
            }"#,
        )
        .unwrap();
        assert_eq!(data.stats.lifetime_solo.kills.value_int, 0);
        assert_eq!(data.stats.lifetime_squad.kills, Default::default());
        assert_eq!(data.stats.lifetime_squad.matches.value_int, 3);

        assert_eq!(data.recent_matches.len(), 2);
        assert_eq!(data.recent_matches[0].playlist_name(), "Squad");
        assert_eq!(data.recent_matches[0].kills, 0);
        assert!(data.recent_matches[0].date_collected.is_empty());
        assert_eq!(data.recent_matches[1].playlist_name(), "Unknown");

        assert_eq!(data.lifetime_stat("Wins"), Some(""));
        assert_eq!(data.lifetime_stats[1], LifetimeStat::default());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let data: StatsResponse = serde_json::from_str(
            r#"{"EpicUserHandle":"ninja","stats":{"p2":{"kills":{"ValueInt":100}}}}"#,
        )
        .unwrap();
        assert!(data.epic_user_handle.is_empty());
        assert_eq!(data.stats.lifetime_solo.kills.value_int, 0);
        assert!(data.unknown.contains_key("EpicUserHandle"));
    }

    #[test]
    fn parse_invalid() {
        assert!(serde_json::from_str::<StatsResponse>("not json").is_err());
        assert!(serde_json::from_str::<StatsResponse>(r#"{"platformId": "three"}"#).is_err());
    }

    #[test]
    fn playlist_names() {
        let names = [
            ("p2", "Solo"),
            ("p10", "Duo"),
            ("p9", "Squad"),
            ("zz", "Unknown"),
            ("", "Unknown"),
            ("curr_p9", "Unknown"),
        ];

        for (playlist, name) in names {
            let m = Match {
                playlist: playlist.to_string(),
                ..Match::default()
            };
            assert_eq!(m.playlist_name(), name);
        }
    }
}
