#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

pub fn thumbs(url: &str) -> Value {
    json!({ "thumbnails": [{ "url": url, "width": 360, "height": 202 }] })
}

/// A finished (non-live) video item as it appears in an item section.
pub fn video_item(id: &str) -> Value {
    json!({
        "videoRenderer": {
            "videoId": id,
            "thumbnail": thumbs(&format!("https://i.ytimg.com/vi/{id}/hq720.jpg")),
            "title": { "runs": [{ "text": format!("Video {id}") }] },
            "ownerText": { "runs": [{ "text": "Some Channel" }] },
            "channelThumbnailSupportedRenderers": {
                "channelThumbnailWithLinkRenderer": {
                    "thumbnail": thumbs("https://yt3.ggpht.com/avatar=s68")
                }
            },
            "lengthText": { "simpleText": "3:33" },
            "shortViewCountText": { "simpleText": "1.2M views" },
            "viewCountText": { "simpleText": "1,234,567 views" },
            "thumbnailOverlays": [
                { "thumbnailOverlayTimeStatusRenderer": { "style": "DEFAULT" } }
            ]
        }
    })
}

/// A live stream item: live badge, view counts in runs, no length.
pub fn live_video_item(id: &str) -> Value {
    json!({
        "videoRenderer": {
            "videoId": id,
            "thumbnail": thumbs("https://i.ytimg.com/vi/live/hq720_live.jpg"),
            "title": { "runs": [{ "text": "Live now" }, { "text": " (ignored run)" }] },
            "ownerText": { "runs": [{ "text": "Live Channel" }] },
            "channelThumbnailSupportedRenderers": {
                "channelThumbnailWithLinkRenderer": {
                    "thumbnail": thumbs("https://yt3.ggpht.com/live=s68")
                }
            },
            "badges": [
                { "metadataBadgeRenderer": { "style": "BADGE_STYLE_TYPE_SIMPLE" } },
                { "metadataBadgeRenderer": { "style": "BADGE_STYLE_TYPE_LIVE_NOW" } }
            ],
            "shortViewCountText": { "runs": [{ "text": "12K" }, { "text": " watching" }] },
            "viewCountText": { "runs": [{ "text": "12,345" }, { "text": " " }, { "text": "watching" }] }
        }
    })
}

pub fn channel_item(id: &str, description_runs: Option<Value>) -> Value {
    let mut renderer = json!({
        "channelId": id,
        "thumbnail": thumbs("//yt3.ggpht.com/channel=s88"),
        "title": { "simpleText": format!("Channel {id}") },
        "videoCountText": { "simpleText": "4.5M subscribers" }
    });
    if let Some(runs) = description_runs {
        renderer["descriptionSnippet"] = json!({ "runs": runs });
    }
    json!({ "channelRenderer": renderer })
}

pub fn playlist_item(id: &str) -> Value {
    json!({
        "playlistRenderer": {
            "playlistId": id,
            "thumbnails": [
                thumbs("https://i.ytimg.com/vi/first/hqdefault.jpg"),
                thumbs("https://i.ytimg.com/vi/second/default.jpg")
            ],
            "title": { "simpleText": format!("Playlist {id}") },
            "videos": [
                { "childVideoRenderer": {
                    "videoId": "a1",
                    "title": { "simpleText": "First" },
                    "lengthText": { "simpleText": "4:01" }
                } },
                { "childVideoRenderer": {
                    "videoId": "a2",
                    "title": { "simpleText": "Second" },
                    "lengthText": { "simpleText": "10:12" }
                } }
            ]
        }
    })
}

pub fn continuation_section(token: &str) -> Value {
    json!({
        "continuationItemRenderer": {
            "trigger": "CONTINUATION_TRIGGER_ON_ITEM_SHOWN",
            "continuationEndpoint": {
                "continuationCommand": { "token": token, "request": "CONTINUATION_REQUEST_TYPE_SEARCH" }
            }
        }
    })
}

pub fn item_section(items: Vec<Value>) -> Value {
    json!({ "itemSectionRenderer": { "contents": items } })
}

/// `ytInitialData` for a results page with the given section list.
pub fn initial_data(sections: Vec<Value>) -> Value {
    json!({
        "contents": {
            "twoColumnSearchResultsRenderer": {
                "primaryContents": {
                    "sectionListRenderer": { "contents": sections }
                }
            }
        }
    })
}

/// Body of a continuation response appending the given sections.
pub fn continuation_response(sections: Vec<Value>) -> Value {
    json!({
        "responseContext": {},
        "onResponseReceivedCommands": [{
            "clickTrackingParams": "x",
            "appendContinuationItemsAction": {
                "targetId": "search-feed",
                "continuationItems": sections
            }
        }]
    })
}
