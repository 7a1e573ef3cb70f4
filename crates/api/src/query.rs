//! Shared query parameter types for API handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use trivia_core::pagination::Page;

/// `?page=N` on every paged listing.
///
/// Parsed leniently: the first `page` wins when the key repeats, and a
/// malformed value or undecodable query string falls back to page 1. This
/// extractor never rejects a request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::from_param(self.page.as_deref())
    }

    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Self { page }
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Self::from_pairs(pairs),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Ignoring undecodable query string");
                Self::default()
            }
        };
        Ok(params)
    }
}
