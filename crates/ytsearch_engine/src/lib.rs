//! Ytsearch engine: page fetching, bootstrap extraction and the search /
//! continuation driver.
mod bootstrap;
mod client;
mod fetch;
mod settings;
mod types;

pub use bootstrap::{parse_bootstrap, BootstrapData};
pub use client::{next_page, search, SearchClient};
pub use fetch::{FetchSettings, Fetcher, HttpResponse, ReqwestFetcher};
pub use settings::{SearchSettings, DEFAULT_BASE_URL};
pub use types::{
    FailureKind, FetchError, Marker, SearchError, UpstreamFormatError,
    BLOCKED_PHRASE,
};

pub use ytsearch_core::{
    ChannelResult, PaginationPhase, PaginationState, PlaylistResult, PlaylistVideo, ResultKind,
    SearchFilter, SearchResult, Thumbnail, VideoChannel, VideoResult, ViewsText,
};
