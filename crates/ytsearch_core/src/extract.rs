use serde_json::Value;

use crate::node::Node;
use crate::{
    ChannelResult, LookupError, PlaylistResult, PlaylistVideo, ResultKind, SearchResult,
    VideoChannel, VideoResult, ViewsText,
};

/// Recognizes one kind of render node and converts it into a [`SearchResult`].
///
/// `construct` assumes `classify` returned true for the same node; it does not
/// re-validate and reports any missing field as a [`LookupError`].
pub trait ResultExtractor: Send + Sync {
    fn kind(&self) -> ResultKind;
    fn classify(&self, item: &Value) -> bool;
    fn construct(&self, item: &Value) -> Result<SearchResult, LookupError>;
}

/// Extractors in priority order; the first one that classifies a node wins.
pub static EXTRACTORS: [&dyn ResultExtractor; 3] =
    [&VideoExtractor, &ChannelExtractor, &PlaylistExtractor];

const VIDEO_RENDERER: &str = "videoRenderer";
const PLAYLIST_VIDEO_RENDERER: &str = "playlistVideoRenderer";
const CHANNEL_RENDERER: &str = "channelRenderer";
const PLAYLIST_RENDERER: &str = "playlistRenderer";
const CHILD_VIDEO_RENDERER: &str = "childVideoRenderer";

const VIDEO_ID: &str = "/videoId";
const THUMBNAILS: &str = "/thumbnail/thumbnails";
const FIRST_TITLE_RUN: &str = "/title/runs/0/text";
const FIRST_OWNER_RUN: &str = "/ownerText/runs/0/text";
const CHANNEL_THUMBNAILS: &str =
    "/channelThumbnailSupportedRenderers/channelThumbnailWithLinkRenderer/thumbnail/thumbnails";
const BADGES: &str = "/badges";
const BADGE_STYLE: &str = "/metadataBadgeRenderer/style";
const THUMBNAIL_OVERLAYS: &str = "/thumbnailOverlays";
const OVERLAY_STYLE: &str = "/thumbnailOverlayTimeStatusRenderer/style";
const LENGTH_SIMPLE_TEXT: &str = "/lengthText/simpleText";
const SHORT_VIEWS_RUNS: &str = "/shortViewCountText/runs";
const SHORT_VIEWS_SIMPLE_TEXT: &str = "/shortViewCountText/simpleText";
const VIEWS_RUNS: &str = "/viewCountText/runs";
const VIEWS_SIMPLE_TEXT: &str = "/viewCountText/simpleText";

const CHANNEL_ID: &str = "/channelId";
const TITLE_SIMPLE_TEXT: &str = "/title/simpleText";
const DESCRIPTION_RUNS: &str = "/descriptionSnippet/runs";
const SUBSCRIBERS_SIMPLE_TEXT: &str = "/videoCountText/simpleText";

const PLAYLIST_ID: &str = "/playlistId";
const FIRST_THUMBNAIL_GROUP: &str = "/thumbnails/0/thumbnails";
const PLAYLIST_VIDEOS: &str = "/videos";
const CHILD_VIDEO: &str = "/childVideoRenderer";

const LIVE_NOW_BADGE_STYLE: &str = "BADGE_STYLE_TYPE_LIVE_NOW";
const LIVE_OVERLAY_STYLE: &str = "LIVE";

#[derive(Debug, Default, Clone, Copy)]
pub struct VideoExtractor;

impl VideoExtractor {
    /// The primary video sub-node if present, else the playlist-embedded one.
    fn video_node(item: &Value) -> Option<Node<'_>> {
        Node::child(item, VIDEO_RENDERER).or_else(|| Node::child(item, PLAYLIST_VIDEO_RENDERER))
    }

    fn is_live(video: &Node<'_>) -> bool {
        any_style(video.optional_array(BADGES), BADGE_STYLE, LIVE_NOW_BADGE_STYLE)
            || any_style(
                video.optional_array(THUMBNAIL_OVERLAYS),
                OVERLAY_STYLE,
                LIVE_OVERLAY_STYLE,
            )
    }
}

fn any_style(entries: Option<&[Value]>, path: &str, style: &str) -> bool {
    entries.is_some_and(|entries| {
        entries
            .iter()
            .any(|entry| entry.pointer(path).and_then(Value::as_str) == Some(style))
    })
}

impl ResultExtractor for VideoExtractor {
    fn kind(&self) -> ResultKind {
        ResultKind::Video
    }

    fn classify(&self, item: &Value) -> bool {
        Self::video_node(item).is_some_and(|video| video.nonempty_str(VIDEO_ID).is_some())
    }

    fn construct(&self, item: &Value) -> Result<SearchResult, LookupError> {
        let video = Self::video_node(item).ok_or(LookupError::Missing {
            renderer: VIDEO_RENDERER,
            path: "/",
        })?;

        let channel = VideoChannel {
            title: video.optional_str(FIRST_OWNER_RUN).map(str::to_owned),
            thumbnails: video.thumbnails(CHANNEL_THUMBNAILS)?,
        };

        let live = Self::is_live(&video);
        let (length_text, views_text) = if live {
            let views = ViewsText {
                short: video.joined_runs(SHORT_VIEWS_RUNS)?,
                long: video.joined_runs(VIEWS_RUNS)?,
            };
            (None, views)
        } else {
            let length = video.require_str(LENGTH_SIMPLE_TEXT)?.to_owned();
            let views = ViewsText {
                short: video.require_str(SHORT_VIEWS_SIMPLE_TEXT)?.to_owned(),
                long: video.require_str(VIEWS_SIMPLE_TEXT)?.to_owned(),
            };
            (Some(length), views)
        };

        Ok(SearchResult::Video(VideoResult {
            id: video.require_str(VIDEO_ID)?.to_owned(),
            thumbnails: video.thumbnails(THUMBNAILS)?,
            title: video.require_str(FIRST_TITLE_RUN)?.to_owned(),
            channel,
            live,
            length_text,
            views_text,
        }))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelExtractor;

impl ChannelExtractor {
    /// `None` when the snippet has no run list; otherwise the non-empty run
    /// texts joined together, which may be the empty string.
    fn description(channel: &Node<'_>) -> Option<String> {
        let runs = channel.optional_array(DESCRIPTION_RUNS)?;
        Some(
            runs.iter()
                .filter_map(|run| run.get("text").and_then(Value::as_str))
                .filter(|text| !text.is_empty())
                .collect(),
        )
    }
}

impl ResultExtractor for ChannelExtractor {
    fn kind(&self) -> ResultKind {
        ResultKind::Channel
    }

    fn classify(&self, item: &Value) -> bool {
        Node::child(item, CHANNEL_RENDERER).is_some()
    }

    fn construct(&self, item: &Value) -> Result<SearchResult, LookupError> {
        let channel = Node::child(item, CHANNEL_RENDERER).ok_or(LookupError::Missing {
            renderer: CHANNEL_RENDERER,
            path: "/",
        })?;

        Ok(SearchResult::Channel(ChannelResult {
            id: channel.require_str(CHANNEL_ID)?.to_owned(),
            thumbnails: channel.thumbnails(THUMBNAILS)?,
            title: channel.require_str(TITLE_SIMPLE_TEXT)?.to_owned(),
            description: Self::description(&channel),
            subscribers_text: channel.require_str(SUBSCRIBERS_SIMPLE_TEXT)?.to_owned(),
        }))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlaylistExtractor;

impl PlaylistExtractor {
    fn video(entry: &Value, playlist: &Node<'_>) -> Result<PlaylistVideo, LookupError> {
        let child = entry
            .pointer(CHILD_VIDEO)
            .filter(|value| !value.is_null())
            .map(|value| Node::new(CHILD_VIDEO_RENDERER, value))
            .ok_or(LookupError::Missing {
                renderer: playlist.renderer(),
                path: "/videos/*/childVideoRenderer",
            })?;

        Ok(PlaylistVideo {
            id: child.require_str(VIDEO_ID)?.to_owned(),
            title: child.require_str(TITLE_SIMPLE_TEXT)?.to_owned(),
            length_text: child.require_str(LENGTH_SIMPLE_TEXT)?.to_owned(),
        })
    }
}

impl ResultExtractor for PlaylistExtractor {
    fn kind(&self) -> ResultKind {
        ResultKind::Playlist
    }

    fn classify(&self, item: &Value) -> bool {
        Node::child(item, PLAYLIST_RENDERER)
            .is_some_and(|playlist| playlist.nonempty_str(PLAYLIST_ID).is_some())
    }

    fn construct(&self, item: &Value) -> Result<SearchResult, LookupError> {
        let playlist = Node::child(item, PLAYLIST_RENDERER).ok_or(LookupError::Missing {
            renderer: PLAYLIST_RENDERER,
            path: "/",
        })?;

        let videos = playlist
            .require_array(PLAYLIST_VIDEOS)?
            .iter()
            .map(|entry| Self::video(entry, &playlist))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchResult::Playlist(PlaylistResult {
            id: playlist.require_str(PLAYLIST_ID)?.to_owned(),
            thumbnail: playlist.thumbnails(FIRST_THUMBNAIL_GROUP)?,
            title: playlist.require_str(TITLE_SIMPLE_TEXT)?.to_owned(),
            videos,
        }))
    }
}
