use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::errors::{invalid_value, SdsResult};

use super::token::BearerToken;

pub const ACCEPT_VERBOSITY: HeaderName = HeaderName::from_static("accept-verbosity");

/// Base headers of every SDS call.
///
/// With `accept_verbosity` the service also returns properties holding
/// default values.
pub fn sds_headers(token: &BearerToken, accept_verbosity: bool) -> SdsResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let bearer = HeaderValue::from_str(&format!("Bearer {}", token.access_token())).map_err(invalid_value)?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if accept_verbosity {
        headers.insert(ACCEPT_VERBOSITY, HeaderValue::from_static("verbose"));
    }

    Ok(headers)
}
