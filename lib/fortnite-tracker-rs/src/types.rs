pub mod platform;
pub mod playlist;
pub mod stats;
pub mod stats_response;

pub use self::{
    platform::{
        InvalidPlatform,
        Platform,
    },
    playlist::Playlist,
    stats::{
        Metric,
        Stats,
        StatsGroup,
    },
    stats_response::{
        LifetimeStat,
        Match,
        StatsResponse,
    },
};

/// Deserialize a value, treating `null` as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize a list, treating a `null` list or `null` items as the default.
pub(crate) fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
