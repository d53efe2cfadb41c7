use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{
        header::{HOST, ORIGIN},
        request::Parts,
        HeaderMap,
    },
};
use url::Url;

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IsHtmx(is_htmx(&parts.headers)))
    }
}

pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// A plain form post from one of our own pages: the browser-set `Origin`
/// names the same authority as `Host`.
pub fn is_same_origin(headers: &HeaderMap) -> bool {
    let origin = headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Url::parse(v).ok());
    let host = headers.get(HOST).and_then(|v| v.to_str().ok());

    let (Some(origin), Some(host)) = (origin, host) else {
        return false;
    };
    let Some(origin_host) = origin.host_str() else {
        return false;
    };

    let authority = match origin.port() {
        Some(port) => format!("{origin_host}:{port}"),
        None => origin_host.to_owned(),
    };
    authority.eq_ignore_ascii_case(host)
}
