use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::errors::{SdsError, SdsResult};

use super::mask_secret;

/// Tokens are refreshed once less than this much lifetime is left.
pub const REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// Access token issued by the identity server for client-credential auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: ExpiresIn,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExpiresIn {
    Seconds(f64),
    Text(String),
}

#[derive(Deserialize)]
struct DiscoveryDocument {
    token_endpoint: String,
}

impl BearerToken {
    pub fn new<S: Into<String>>(access_token: S, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    /// Parses a token endpoint response; `expires_in` is relative to `now`.
    pub fn from_token_response(json: &str, now: DateTime<Utc>) -> SdsResult<Self> {
        let resp: TokenResponse = serde_json::from_str(json)?;

        let seconds = match resp.expires_in {
            ExpiresIn::Seconds(v) => v,
            ExpiresIn::Text(v) => v
                .trim()
                .parse::<f64>()
                .map_err(|_| SdsError::InvalidValue(format!("expires_in '{}'", v)))?,
        };

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SdsError::InvalidValue(format!("expires_in {}", seconds)));
        }

        let expires_at = Duration::try_milliseconds((seconds * 1000.0) as i64)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| SdsError::InvalidValue(format!("expires_in {} out of range", seconds)))?;

        Ok(Self::new(resp.access_token, expires_at))
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now <= Duration::seconds(REFRESH_MARGIN_SECS)
    }

    /// Mask the token for safe display (keeps last 4 chars).
    pub fn masked(&self) -> String {
        mask_secret(&self.access_token)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &self.masked())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Extracts the token endpoint from an OpenID discovery document.
pub fn token_endpoint(discovery_json: &str) -> SdsResult<String> {
    let doc: DiscoveryDocument = serde_json::from_str(discovery_json)?;
    Ok(doc.token_endpoint)
}

/// Form body of a client-credentials token request.
pub fn client_credentials_form<'a>(client_id: &'a str, client_key: &'a str) -> [(&'static str, &'a str); 3] {
    [
        ("client_id", client_id),
        ("client_secret", client_key),
        ("grant_type", "client_credentials"),
    ]
}
