use thiserror::Error;

/// A node passed classification but lacks a field its extractor relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{renderer}: missing field `{path}`")]
    Missing {
        renderer: &'static str,
        path: &'static str,
    },
    #[error("{renderer}: field `{path}` has unexpected shape: {message}")]
    Shape {
        renderer: &'static str,
        path: &'static str,
        message: String,
    },
}

impl LookupError {
    pub fn renderer(&self) -> &'static str {
        match self {
            LookupError::Missing { renderer, .. } | LookupError::Shape { renderer, .. } => renderer,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            LookupError::Missing { path, .. } | LookupError::Shape { path, .. } => path,
        }
    }
}

/// Failure while walking a whole results page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The section list that carries results is absent; the upstream layout changed.
    #[error("page is missing `{path}`: {hint}")]
    MissingSection {
        path: &'static str,
        hint: &'static str,
    },
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
