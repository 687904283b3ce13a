//! HTTP retrieval of JSON documents
//!
//! One GET per call. No retries and no timeout beyond what the client
//! enforces by default.

use crate::error::FetchError;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::{debug, error};

const CLIENT_NAME: &str = concat!("jsonsheet/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests and decodes the body as JSON
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Fetcher { client }
    }

    /// Fetch `url` and decode the response body.
    ///
    /// Failures are logged once here and then returned to the caller.
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        match self.get_json(url).await {
            Ok(value) => Ok(value),
            Err(err) => {
                error!("Error fetching data: {}", err);
                Err(err)
            }
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, CLIENT_NAME)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let mut body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?
            .to_vec();
        debug!("Received {} bytes from {}", body.len(), url);

        decode_json(&mut body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a JSON document with simd-json into a `serde_json::Value`.
///
/// The buffer is used as scratch space and is clobbered.
pub fn decode_json(bytes: &mut [u8]) -> Result<Value, simd_json::Error> {
    simd_json::serde::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_key_order() {
        let mut bytes = br#"{"zeta": 1, "alpha": {"b": 2, "a": 3}, "tags": ["x"]}"#.to_vec();

        let value = decode_json(&mut bytes).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "tags"]);
        assert_eq!(value["alpha"], json!({"b": 2, "a": 3}));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let mut bytes = b"<html>oops</html>".to_vec();
        assert!(decode_json(&mut bytes).is_err());

        let mut empty = Vec::new();
        assert!(decode_json(&mut empty).is_err());
    }
}
