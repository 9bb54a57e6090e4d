use serde::Serialize;
use serde_json::Value;

/// Body echoed to the continuation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinuationRequest {
    pub context: Value,
    pub continuation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPhase {
    /// No continuation token has been captured yet.
    Fresh,
    /// A token is held and the next page can be requested.
    Continuable,
}

/// Resumption state for one query.
///
/// Produced by a search and updated in place by every successful page fetch.
/// It is the only carrier of resumption state; callers thread it through
/// calls and never rebuild it by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    auth_token: String,
    request_body: ContinuationRequest,
}

impl PaginationState {
    /// Builds the state a search returns from the page's auth token and request
    /// context. Search calls are the only intended caller.
    #[doc(hidden)]
    pub fn new(auth_token: impl Into<String>, context: Value) -> Self {
        Self {
            auth_token: auth_token.into(),
            request_body: ContinuationRequest {
                context,
                continuation: None,
            },
        }
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn request_body(&self) -> &ContinuationRequest {
        &self.request_body
    }

    pub fn continuation_token(&self) -> Option<&str> {
        self.request_body.continuation.as_deref()
    }

    pub fn phase(&self) -> PaginationPhase {
        match self.request_body.continuation {
            Some(_) => PaginationPhase::Continuable,
            None => PaginationPhase::Fresh,
        }
    }

    pub(crate) fn replace_token(&mut self, token: String) {
        self.request_body.continuation = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_state_is_fresh() {
        let state = PaginationState::new("key", json!({ "client": {} }));
        assert_eq!(state.phase(), PaginationPhase::Fresh);
        assert_eq!(state.continuation_token(), None);
        assert_eq!(state.auth_token(), "key");
    }

    #[test]
    fn replacing_token_makes_state_continuable() {
        let mut state = PaginationState::new("key", json!({}));
        state.replace_token("T1".to_string());
        state.replace_token("T2".to_string());
        assert_eq!(state.phase(), PaginationPhase::Continuable);
        assert_eq!(state.continuation_token(), Some("T2"));
    }

    #[test]
    fn request_body_serializes_context_and_continuation() {
        let mut state = PaginationState::new("key", json!({ "client": { "hl": "en" } }));
        assert_eq!(
            serde_json::to_value(state.request_body()).unwrap(),
            json!({ "context": { "client": { "hl": "en" } }, "continuation": null })
        );

        state.replace_token("abc".to_string());
        assert_eq!(
            serde_json::to_value(state.request_body()).unwrap()["continuation"],
            json!("abc")
        );
    }
}
