use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Video,
    Channel,
    Playlist,
}

impl ResultKind {
    /// The discriminator written to the `type` key of serialized results.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultKind::Video => "video",
            ResultKind::Channel => "channel",
            ResultKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One converted search hit. The variant is chosen at construction and is the
/// only source of the `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Video(VideoResult),
    Channel(ChannelResult),
    Playlist(PlaylistResult),
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Video(_) => ResultKind::Video,
            SearchResult::Channel(_) => ResultKind::Channel,
            SearchResult::Playlist(_) => ResultKind::Playlist,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchResult::Video(video) => &video.id,
            SearchResult::Channel(channel) => &channel.id,
            SearchResult::Playlist(playlist) => &playlist.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchResult::Video(video) => &video.title,
            SearchResult::Channel(channel) => &channel.title,
            SearchResult::Playlist(playlist) => &playlist.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub id: String,
    pub thumbnails: Vec<Thumbnail>,
    pub title: String,
    pub channel: VideoChannel,
    pub live: bool,
    /// `None` exactly when `live` is set; the key is then left out of the JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_text: Option<String>,
    pub views_text: ViewsText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChannel {
    pub title: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsText {
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResult {
    pub id: String,
    pub thumbnails: Vec<Thumbnail>,
    pub title: String,
    pub description: Option<String>,
    pub subscribers_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub id: String,
    pub thumbnail: Vec<Thumbnail>,
    pub title: String,
    pub videos: Vec<PlaylistVideo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistVideo {
    pub id: String,
    pub title: String,
    pub length_text: String,
}
