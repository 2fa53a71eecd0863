//! HTTP response types.

use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};

/// Longest error body excerpt carried in [`FetchError::HttpStatus`].
const ERROR_BODY_EXCERPT: usize = 200;

/// An HTTP response from a request.
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn from_reqwest(response: reqwest::Response) -> Self {
        Self { inner: response }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Turn a non-2xx response into [`FetchError::HttpStatus`].
    ///
    /// The error carries the start of the body, which for JSON APIs usually
    /// holds a `message` field explaining the failure.
    pub async fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let body = self.inner.text().await.unwrap_or_default();
        let message = error_message(&body);
        Err(FetchError::HttpStatus { status, message })
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Parse the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(ERROR_BODY_EXCERPT).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_message() {
        let body = r#"{"message":"API rate limit exceeded","documentation_url":"x"}"#;
        assert_eq!(error_message(body).as_deref(), Some("API rate limit exceeded"));
    }

    #[test]
    fn test_error_message_falls_back_to_text() {
        assert_eq!(error_message("  Not Found \n").as_deref(), Some("Not Found"));
        assert_eq!(error_message("   "), None);
    }
}
