use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;

use crate::client::Configuration;
use crate::errors::{classify_failure, Result};

/// Header carrying the subscription credential on every request.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Path prefix appended to the configured endpoint.
const API_PATH_PREFIX: &str = "face/v1.0/";

/// Request body kinds the Face API accepts.
pub(crate) enum Payload {
    Empty,
    /// `application/json` object payload.
    Json(Value),
    /// `application/octet-stream` raw image bytes.
    Octets(Vec<u8>),
}

/// Pre-configured HTTP access shared by all resource operations.
///
/// Every request resolves its relative path against the normalized base URL,
/// carries the subscription header, and has its response run through
/// [`classify_failure`] before control returns to the caller.
pub(crate) struct Transport {
    base_url: String,
    config: Configuration,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: Configuration, http: reqwest::Client) -> Self {
        let base_url = format!("{}/{API_PATH_PREFIX}", config.endpoint().trim_end_matches('/'));
        Self {
            base_url,
            config,
            http,
        }
    }

    /// Effective base URL, e.g. `https://x.example/face/v1.0/`.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and return the raw response.
    ///
    /// Statuses >= 400 never reach the caller as responses; they come back
    /// as [`crate::Error::Api`].
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        payload: Payload,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(SUBSCRIPTION_KEY_HEADER, self.config.subscription_key());

        if !query.is_empty() {
            request = request.query(query);
        }

        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Octets(bytes) => request
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes),
        };

        let response = request.send().await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(&method, &url, status, &body));
        }

        Ok(response)
    }

    /// Issue a request and decode the JSON response body.
    pub(crate) async fn send_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        payload: Payload,
    ) -> Result<Value> {
        let response = self.send(method, path, query, payload).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issue a request whose success carries no meaningful body.
    pub(crate) async fn send_unit(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        payload: Payload,
    ) -> Result<()> {
        self.send(method, path, query, payload).await?;
        Ok(())
    }
}
