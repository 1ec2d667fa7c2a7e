use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::document::{ExerciseInfo, PersistedWorkout, WorkoutDocument};
use crate::error::{Result, TrackerError};
use crate::traits::WorkoutStore;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// HTTP client for the fitness REST API.
pub struct WorkoutsClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl WorkoutsClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fit-session/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn request<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method.clone(), self.url(endpoint));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("{} {}", method, endpoint);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(status, &text);
            error!("API error on {} {}: {}", method, endpoint, message);
            return Err(TrackerError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Built-in exercises plus the caller's custom ones.
    pub async fn list_exercises(&self) -> Result<Vec<ExerciseInfo>> {
        self.request::<(), _>(Method::GET, "/exercises", None).await
    }
}

/// Mirrors the front end: the `error` field of the body, or a generic message.
fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()))
}

#[async_trait::async_trait]
impl WorkoutStore for WorkoutsClient {
    async fn create(&self, document: &WorkoutDocument) -> Result<PersistedWorkout> {
        self.request(Method::POST, "/workouts", Some(document)).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        let message = api_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Validation failed", "details": ["name: required"]}"#,
        );
        assert_eq!(message, "Validation failed");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            api_error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "Request failed (502)"
        );
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = WorkoutsClient::new("http://localhost:5000/api/", Some("  ".into())).unwrap();
        assert_eq!(client.url("/workouts"), "http://localhost:5000/api/workouts");
        assert!(client.token.is_none());
    }
}
