#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};

pub const API_KEY: &str = "AIzaSyMockKey";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

pub fn context() -> Value {
    json!({ "client": { "hl": "en", "gl": "US", "clientName": "WEB", "clientVersion": "2.20240101" } })
}

pub fn video_item(id: &str) -> Value {
    let thumbs = json!({ "thumbnails": [{ "url": format!("https://i.ytimg.com/vi/{id}/hq.jpg"), "width": 480, "height": 360 }] });
    json!({
        "videoRenderer": {
            "videoId": id,
            "thumbnail": thumbs,
            "title": { "runs": [{ "text": format!("Video {id}") }] },
            "ownerText": { "runs": [{ "text": "Uploader" }] },
            "channelThumbnailSupportedRenderers": {
                "channelThumbnailWithLinkRenderer": { "thumbnail": thumbs }
            },
            "lengthText": { "simpleText": "1:00" },
            "shortViewCountText": { "simpleText": "10 views" },
            "viewCountText": { "simpleText": "10 views" }
        }
    })
}

pub fn channel_item(id: &str) -> Value {
    json!({
        "channelRenderer": {
            "channelId": id,
            "thumbnail": { "thumbnails": [{ "url": "//yt3.ggpht.com/c", "width": 88, "height": 88 }] },
            "title": { "simpleText": format!("Channel {id}") },
            "descriptionSnippet": { "runs": [{ "text": "About " }, { "text": "us" }] },
            "videoCountText": { "simpleText": "1K subscribers" }
        }
    })
}

pub fn continuation_section(token: &str) -> Value {
    json!({
        "continuationItemRenderer": {
            "continuationEndpoint": { "continuationCommand": { "token": token } }
        }
    })
}

pub fn item_section(items: Vec<Value>) -> Value {
    json!({ "itemSectionRenderer": { "contents": items } })
}

pub fn initial_data(sections: Vec<Value>) -> Value {
    json!({
        "contents": {
            "twoColumnSearchResultsRenderer": {
                "primaryContents": { "sectionListRenderer": { "contents": sections } }
            }
        }
    })
}

pub fn continuation_response(sections: Vec<Value>) -> Value {
    json!({
        "onResponseReceivedCommands": [{
            "appendContinuationItemsAction": { "continuationItems": sections }
        }]
    })
}

/// A results page embedding the API key, request context and bootstrap data
/// the way the upstream frontend does.
pub fn results_page(initial_data: &Value) -> String {
    let context = context();
    format!(
        concat!(
            "<!DOCTYPE html><html><head><script nonce=\"abc\">",
            "ytcfg.set({{\"INNERTUBE_API_KEY\":\"{key}\",\"innertubeApiKey\":\"{key}\",",
            "\"INNERTUBE_CONTEXT\":{context},\"INNERTUBE_CONTEXT_CLIENT_NAME\":1}});</script>",
            "</head><body><script nonce=\"abc\">var ytInitialData = {data};</script>",
            "<script>window.other = 1;</script></body></html>"
        ),
        key = API_KEY,
        context = context,
        data = initial_data,
    )
}
