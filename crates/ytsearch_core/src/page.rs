//! Walks a results page (initial bootstrap data or a continuation response),
//! converting result items and capturing the continuation token.

use search_logging::{search_debug, search_warn};
use serde_json::Value;

use crate::node::Node;
use crate::{convert_items, PageError, PaginationState, SearchResult};

const SEARCH_SECTIONS: &str =
    "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents";
const APPENDED_ITEMS_ACTION: &str = "/onResponseReceivedCommands/0/appendContinuationItemsAction";
const CONTINUATION_ITEMS: &str = "/continuationItems";

const CONTINUATION_ITEM_RENDERER: &str = "continuationItemRenderer";
const ITEM_SECTION_RENDERER: &str = "itemSectionRenderer";
const CONTINUATION_TOKEN: &str = "/continuationEndpoint/continuationCommand/token";
const SECTION_CONTENTS: &str = "/contents";

/// Converts the results carried by a search page's bootstrap data and records
/// the page's continuation token on `state`.
pub fn extract_search_page(
    initial_data: &Value,
    state: &mut PaginationState,
) -> Result<Vec<SearchResult>, PageError> {
    let sections = initial_data
        .pointer(SEARCH_SECTIONS)
        .and_then(Value::as_array)
        .ok_or(PageError::MissingSection {
            path: SEARCH_SECTIONS,
            hint: "search results layout changed",
        })?;
    walk_sections(sections, state)
}

/// Converts the items appended by a continuation response and records the
/// next continuation token on `state`.
pub fn extract_continuation_page(
    response: &Value,
    state: &mut PaginationState,
) -> Result<Vec<SearchResult>, PageError> {
    let Some(action) = response
        .pointer(APPENDED_ITEMS_ACTION)
        .filter(|value| !value.is_null())
    else {
        search_warn!("continuation response carried no appended items");
        return Err(PageError::MissingSection {
            path: APPENDED_ITEMS_ACTION,
            hint: "no data received; was the pagination state from a search?",
        });
    };
    let items = action
        .pointer(CONTINUATION_ITEMS)
        .and_then(Value::as_array)
        .ok_or(PageError::MissingSection {
            path: CONTINUATION_ITEMS,
            hint: "appended items action without an item list",
        })?;
    walk_sections(items, state)
}

/// The token is committed only once the whole page converted, so a failed
/// page leaves `state` untouched.
fn walk_sections(
    sections: &[Value],
    state: &mut PaginationState,
) -> Result<Vec<SearchResult>, PageError> {
    let mut results = Vec::new();
    let mut token = None;

    for section in sections {
        if let Some(continuation) = Node::child(section, CONTINUATION_ITEM_RENDERER) {
            // Later markers overwrite earlier ones.
            token = Some(continuation.require_str(CONTINUATION_TOKEN)?.to_owned());
        } else if let Some(item_section) = Node::child(section, ITEM_SECTION_RENDERER) {
            convert_items(item_section.require_array(SECTION_CONTENTS)?, &mut results)?;
        }
    }

    match token {
        Some(token) => {
            search_debug!("captured continuation token ({} chars)", token.len());
            state.replace_token(token);
        }
        None => search_debug!("page carried no continuation marker"),
    }
    Ok(results)
}
