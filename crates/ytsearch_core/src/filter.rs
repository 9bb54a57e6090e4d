use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Restricts a search to one kind of result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchFilter {
    Video,
    Channel,
    Playlist,
    Movie,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 4] = [
        SearchFilter::Video,
        SearchFilter::Channel,
        SearchFilter::Playlist,
        SearchFilter::Movie,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SearchFilter::Video => "video",
            SearchFilter::Channel => "channel",
            SearchFilter::Playlist => "playlist",
            SearchFilter::Movie => "movie",
        }
    }

    /// Value of the `sp` query parameter, before URL encoding.
    pub const fn sp_param(self) -> &'static str {
        match self {
            SearchFilter::Video => "EgIQAQ==",
            SearchFilter::Channel => "EgIQAg==",
            SearchFilter::Playlist => "EgIQAw==",
            SearchFilter::Movie => "EgIQBA==",
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search filter `{0}` (expected video, channel, playlist or movie)")]
pub struct ParseFilterError(pub String);

impl FromStr for SearchFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}
