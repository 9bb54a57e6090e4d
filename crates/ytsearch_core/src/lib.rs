//! Ytsearch core: pure render-node extraction and pagination state.
mod dispatch;
mod error;
mod extract;
mod filter;
mod node;
mod page;
mod pagination;
mod request;
mod types;

pub use dispatch::{classify, convert_item, convert_items};
pub use error::{LookupError, PageError};
pub use extract::{
    ChannelExtractor, PlaylistExtractor, ResultExtractor, VideoExtractor, EXTRACTORS,
};
pub use filter::{ParseFilterError, SearchFilter};
pub use page::{extract_continuation_page, extract_search_page};
pub use pagination::{ContinuationRequest, PaginationPhase, PaginationState};
pub use request::{continuation_url, search_url, CONTINUATION_PATH, RESULTS_PATH};
pub use types::{
    ChannelResult, PlaylistResult, PlaylistVideo, ResultKind, SearchResult, Thumbnail,
    VideoChannel, VideoResult, ViewsText,
};
