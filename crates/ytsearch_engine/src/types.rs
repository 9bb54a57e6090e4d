use std::fmt;

use thiserror::Error;
use ytsearch_core::{LookupError, PageError};

/// Body text that accompanies a 403 when the upstream throttles a client.
pub const BLOCKED_PHRASE: &str = "automated queries";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode { encoding: String },
    Encode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode { encoding } => write!(f, "body is not valid {encoding}"),
            FailureKind::Encode => write!(f, "request body could not be encoded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Text markers located in a results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Assignment that opens the bootstrap JSON.
    InitialData,
    /// Key of the API credential echoed on continuation calls.
    ApiKey,
    /// Key of the request context echoed on continuation calls.
    Context,
}

impl Marker {
    pub const fn needle(self) -> &'static str {
        match self {
            Marker::InitialData => "var ytInitialData =",
            Marker::ApiKey => "innertubeApiKey",
            Marker::Context => "INNERTUBE_CONTEXT",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.needle())
    }
}

/// The fetched page or response no longer has the layout this crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamFormatError {
    #[error("`{0}` not present in page")]
    MissingMarker(Marker),
    #[error("no usable value after `{0}`")]
    InvalidValue(Marker),
    #[error("invalid JSON after `{marker}`: {message}")]
    InvalidJson { marker: Marker, message: String },
    #[error("response body is not JSON: {0}")]
    InvalidResponse(String),
    #[error("missing `{path}`: {hint}")]
    MissingSection {
        path: &'static str,
        hint: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("upstream format changed: {0}")]
    UpstreamFormat(#[from] UpstreamFormatError),
    #[error("blocked by upstream rate limiting (HTTP 403)")]
    Blocked,
    #[error("malformed result node: {0}")]
    Lookup(#[from] LookupError),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl From<PageError> for SearchError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::MissingSection { path, hint } => {
                SearchError::UpstreamFormat(UpstreamFormatError::MissingSection { path, hint })
            }
            PageError::Lookup(err) => SearchError::Lookup(err),
        }
    }
}
