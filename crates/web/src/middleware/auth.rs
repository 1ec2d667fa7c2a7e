use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::WebError;

/// The user a request acts for, resolved from its bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Bearer tokens and the user each one belongs to.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: HashMap<String, Uuid>,
}

impl ApiKeys {
    /// Parses `token:user-uuid` pairs. Malformed pairs are skipped.
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|pair| {
                let parsed = pair
                    .split_once(':')
                    .and_then(|(token, user)| Some((token.trim(), user.trim().parse::<Uuid>().ok()?)))
                    .filter(|(token, _)| !token.is_empty());
                if parsed.is_none() {
                    tracing::warn!("Ignoring malformed API key entry");
                }
                parsed.map(|(token, user)| (token.to_string(), user))
            })
            .collect();

        Self { keys }
    }

    pub fn user_for(&self, token: &str) -> Option<Uuid> {
        self.keys.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let Some(token) = bearer_token(request.headers()) else {
        return Err(WebError::Unauthorized);
    };

    let Some(user_id) = api_keys.user_for(token) else {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    };

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

/// Attaches [`AuthUser`] when a valid token is present; anonymous otherwise.
pub async fn optional_auth(
    State(api_keys): State<ApiKeys>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        match api_keys.user_for(token) {
            Some(user_id) => {
                request.extensions_mut().insert(AuthUser(user_id));
            }
            None => tracing::warn!("Invalid API key on optional route, continuing anonymously"),
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const USER: &str = "7b3c6a52-0c1e-4f55-9d3a-1b2c3d4e5f60";

    #[test]
    fn test_parses_token_user_pairs() {
        let keys = ApiKeys::from_comma_separated(&format!(" alice-token:{USER} , broken, :{USER}, x:nope"));
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.user_for("alice-token"), Some(USER.parse().unwrap()));
        assert_eq!(keys.user_for("broken"), None);
    }

    #[test]
    fn test_empty_config_has_no_keys() {
        assert!(ApiKeys::from_comma_separated("").is_empty());
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
