use url::Url;

use crate::SearchFilter;

pub const RESULTS_PATH: &str = "/results";
pub const CONTINUATION_PATH: &str = "/youtubei/v1/search";

/// Results page URL for `query`, optionally narrowed by `filter`.
pub fn search_url(base: &Url, query: &str, filter: Option<SearchFilter>) -> Url {
    let mut url = base.clone();
    url.set_path(RESULTS_PATH);
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("search_query", query);
        if let Some(filter) = filter {
            pairs.append_pair("sp", filter.sp_param());
        }
    }
    url
}

/// Continuation endpoint URL carrying `auth_token` as the `key` credential.
pub fn continuation_url(base: &Url, auth_token: &str) -> Url {
    let mut url = base.clone();
    url.set_path(CONTINUATION_PATH);
    url.set_query(None);
    url.query_pairs_mut().append_pair("key", auth_token);
    url
}
