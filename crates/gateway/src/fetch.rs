//! Transport seam: one GET, status plus body text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ExternalError;

/// Raw HTTP outcome before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<FetchResponse, ExternalError>;
}

/// reqwest-backed fetcher. The timeout covers connect, headers and body.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn fetch(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<FetchResponse, ExternalError> {
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Request failed");
                ExternalError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ExternalError::Network(e.to_string()))?;

        debug!(url = %url, status, bytes = body.len(), "Response received");
        Ok(FetchResponse { status, body })
    }
}

/// Rejects non-2xx statuses, then parses the body as `T`.
pub fn decode_json<T: DeserializeOwned>(response: FetchResponse) -> Result<T, ExternalError> {
    if !response.is_success() {
        return Err(ExternalError::BadStatus(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| ExternalError::MalformedBody(e.to_string()))
}

/// Appends percent-encoded path segments to `base`.
pub fn endpoint_with_segments(base: &str, segments: &[&str]) -> Result<String, ExternalError> {
    let mut url = Url::parse(base)
        .map_err(|e| ExternalError::Network(format!("invalid endpoint {}: {}", base, e)))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ExternalError::Network(format!("endpoint cannot take a path: {}", base)))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn test_decode_json_success() {
        let payload: Payload = decode_json(FetchResponse::new(200, r#"{"value": 3}"#)).unwrap();
        assert_eq!(payload.value, 3);
    }

    #[test]
    fn test_decode_json_bad_status_wins_over_body() {
        let err = decode_json::<Payload>(FetchResponse::new(401, r#"{"value": 3}"#)).unwrap_err();
        assert_eq!(err, ExternalError::BadStatus(401));
    }

    #[test]
    fn test_decode_json_missing_key() {
        let err = decode_json::<Payload>(FetchResponse::new(200, r#"{"other": 1}"#)).unwrap_err();
        assert!(matches!(err, ExternalError::MalformedBody(_)));
    }

    #[test]
    fn test_endpoint_with_segments_encodes() {
        let url = endpoint_with_segments("https://example.com/timeline/", &["Нью Йорк"]).unwrap();
        assert_eq!(
            url,
            "https://example.com/timeline/%D0%9D%D1%8C%D1%8E%20%D0%99%D0%BE%D1%80%D0%BA"
        );
    }

    #[test]
    fn test_endpoint_with_segments_rejects_garbage() {
        assert!(matches!(
            endpoint_with_segments("not a url", &["x"]),
            Err(ExternalError::Network(_))
        ));
    }
}
