//! Shared REST client for the health-record backend.

use crate::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Thin wrapper binding a [`reqwest::Client`] to the backend base URL.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Create a client for `base_url`, e.g. `https://emr.example.org/ws/rest/v1`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return Err(ClientError::InvalidBaseUrl("base url cannot be empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "base url must start with http:// or https://, got '{base_url}'"
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` (relative to the base URL) and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// POST `body` as JSON to `path`, returning the raw response.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RestClient::new("https://emr.example.org/ws/rest/v1/").unwrap();
        assert_eq!(client.base_url(), "https://emr.example.org/ws/rest/v1");
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        assert!(RestClient::new("").is_err());
        assert!(RestClient::new("ftp://emr.example.org").is_err());
    }
}
