use std::sync::Arc;

use search_logging::{search_info, search_warn};
use url::Url;
use ytsearch_core::{
    continuation_url, extract_continuation_page, extract_search_page, search_url,
    PaginationPhase, PaginationState, SearchFilter, SearchResult,
};

use crate::{
    parse_bootstrap, FailureKind, FetchError, Fetcher, HttpResponse, ReqwestFetcher,
    SearchError, SearchSettings, UpstreamFormatError, BLOCKED_PHRASE,
};

/// Runs searches and continuation requests against one upstream host.
///
/// Each call is a single request followed by synchronous parsing. Nothing is
/// cached or retried.
#[derive(Clone)]
pub struct SearchClient {
    fetcher: Arc<dyn Fetcher>,
    settings: SearchSettings,
}

impl SearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        let fetcher = Arc::new(ReqwestFetcher::new(settings.fetch.clone()));
        Self { fetcher, settings }
    }

    pub fn with_fetcher(settings: SearchSettings, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Fetches the first results page for `query` and returns its results with
    /// the state needed to request the following pages.
    pub async fn search(
        &self,
        query: &str,
        filter: Option<SearchFilter>,
    ) -> Result<(Vec<SearchResult>, PaginationState), SearchError> {
        let url = search_url(&self.base_url()?, query, filter);
        let response = self.fetcher.get(url.as_str()).await?;
        check_status(&response)?;

        let bootstrap = parse_bootstrap(&response.body)?;
        let mut state = PaginationState::new(bootstrap.api_key, bootstrap.context);
        let results = extract_search_page(&bootstrap.initial_data, &mut state)?;

        search_info!(
            "search {query:?} returned {} results ({:?})",
            results.len(),
            state.phase()
        );
        Ok((results, state))
    }

    /// Fetches the page after the one `state` last saw, replacing its
    /// continuation token when the response carries a new one.
    ///
    /// `state` is left unchanged when the call fails.
    pub async fn next_page(
        &self,
        state: &mut PaginationState,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if state.phase() == PaginationPhase::Fresh {
            search_warn!("requesting a next page without a continuation token");
        }

        let url = continuation_url(&self.base_url()?, state.auth_token());
        let body = serde_json::to_value(state.request_body())
            .map_err(|err| FetchError::new(FailureKind::Encode, err.to_string()))?;
        let response = self.fetcher.post_json(url.as_str(), &body).await?;
        check_blocked(&response)?;

        // The upstream answers a stale or missing token with an error status and
        // a JSON body; that body still reaches the appended-items check.
        let page: serde_json::Value = match serde_json::from_str(&response.body) {
            Ok(page) => page,
            Err(err) => {
                check_status(&response)?;
                return Err(UpstreamFormatError::InvalidResponse(err.to_string()).into());
            }
        };
        let results = extract_continuation_page(&page, state)?;

        search_info!(
            "next page returned {} results ({:?})",
            results.len(),
            state.phase()
        );
        Ok(results)
    }

    fn base_url(&self) -> Result<Url, FetchError> {
        Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

fn check_blocked(response: &HttpResponse) -> Result<(), SearchError> {
    if response.status == 403 && response.body.contains(BLOCKED_PHRASE) {
        search_warn!("upstream is throttling this client");
        return Err(SearchError::Blocked);
    }
    Ok(())
}

fn check_status(response: &HttpResponse) -> Result<(), SearchError> {
    check_blocked(response)?;
    if !response.is_success() {
        return Err(FetchError::new(
            FailureKind::HttpStatus(response.status),
            format!("{} answered {}", response.url, response.status),
        )
        .into());
    }
    Ok(())
}

/// Searches with default settings. See [`SearchClient::search`].
pub async fn search(
    query: &str,
    filter: Option<SearchFilter>,
) -> Result<(Vec<SearchResult>, PaginationState), SearchError> {
    SearchClient::default().search(query, filter).await
}

/// Fetches the next page with default settings. See [`SearchClient::next_page`].
pub async fn next_page(state: &mut PaginationState) -> Result<Vec<SearchResult>, SearchError> {
    SearchClient::default().next_page(state).await
}
