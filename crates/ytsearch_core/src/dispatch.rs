use search_logging::{search_debug, search_trace};
use serde_json::Value;

use crate::node::renderer_name;
use crate::{LookupError, ResultExtractor, SearchResult, EXTRACTORS};

/// The first extractor, in priority order, that recognizes `item`.
pub fn classify(item: &Value) -> Option<&'static dyn ResultExtractor> {
    EXTRACTORS
        .iter()
        .copied()
        .find(|extractor| extractor.classify(item))
}

/// Converts one item node. Unrecognized renderer kinds (ads, shelves, promoted
/// content) yield `Ok(None)`.
pub fn convert_item(item: &Value) -> Result<Option<SearchResult>, LookupError> {
    match classify(item) {
        Some(extractor) => {
            search_trace!("{} matched {}", renderer_name(item), extractor.kind());
            extractor.construct(item).map(Some)
        }
        None => {
            search_debug!("skipping unrecognized item {}", renderer_name(item));
            Ok(None)
        }
    }
}

/// Converts every recognized node of `items` onto `out`, in order.
///
/// The first construction failure aborts the batch; `out` is left as it was
/// before the call.
pub fn convert_items(items: &[Value], out: &mut Vec<SearchResult>) -> Result<(), LookupError> {
    let converted = items
        .iter()
        .filter_map(|item| convert_item(item).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    out.extend(converted);
    Ok(())
}
