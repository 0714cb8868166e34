/// A game mode, as identified by a playlist code
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Playlist {
    Solo,
    Duo,
    Squad,
}

impl Playlist {
    /// The lifetime playlist code
    pub fn code(self) -> &'static str {
        match self {
            Self::Solo => "p2",
            Self::Duo => "p10",
            Self::Squad => "p9",
        }
    }

    /// The current season playlist code
    pub fn current_season_code(self) -> &'static str {
        match self {
            Self::Solo => "curr_p2",
            Self::Duo => "curr_p10",
            Self::Squad => "curr_p9",
        }
    }

    /// Get a human readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Duo => "Duo",
            Self::Squad => "Squad",
        }
    }

    /// Look up a playlist from its lifetime code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p2" => Some(Self::Solo),
            "p10" => Some(Self::Duo),
            "p9" => Some(Self::Squad),
            _ => None,
        }
    }
}
