//! Query parameter types for API handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use filmcat_core::pagination::PageNumber;

/// Page selection for list endpoints (`?page=`).
///
/// Never rejects a request. A missing, malformed, or undecodable value
/// selects the first page. When `page` is repeated the last occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam(pub PageNumber);

impl PageParam {
    pub fn from_uri(uri: &Uri) -> Self {
        let raw = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .rev()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value)
            });
        Self(PageNumber::from_query(raw.as_deref()))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PageParam {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
