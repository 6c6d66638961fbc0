//! Backend API Client
//!
//! One method per endpoint, grouped by area. Envelope endpoints answer
//! `{success, message, ...}` and are judged by `success` whatever the HTTP
//! status; the payment and AI endpoints are judged by status alone.

mod auth;
mod cart;
mod food_items;
mod orders;
mod payment;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::models::Envelope;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(format!("{}{}", self.base_url, path))
    }

    // ========================
    // Envelope endpoints
    // ========================

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path).json(body).send().await?;
        read_envelope(path, resp).await
    }

    async fn post_form<B, T>(&self, path: &str, params: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path).form(params).send().await?;
        read_envelope(path, resp).await
    }

    /// Parameters travel in the query string with an empty body.
    async fn post_query<B, T>(&self, path: &str, params: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path).query(params).send().await?;
        read_envelope(path, resp).await
    }

    // ========================
    // Status endpoints
    // ========================

    async fn post_json_status<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path).json(body).send().await?;
        let text = read_status(path, resp).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

async fn read_envelope<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T> {
    let status = resp.status();
    let text = resp.text().await?;
    tracing::debug!(path, status = status.as_u16(), "envelope reply");
    decode_envelope(&text)
}

/// Error for a non-2xx status, otherwise the body text.
async fn read_status(path: &str, resp: Response) -> Result<String> {
    let status = resp.status();
    tracing::debug!(path, status = status.as_u16(), "status reply");
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}

/// Check `success`, then decode the payload from the same object.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    let head = Envelope::deserialize(&value)?;
    if !head.success {
        return Err(ApiError::Rejected { message: head.message });
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ack, CartAdded};

    #[test]
    fn test_decode_envelope_success() {
        let reply: CartAdded = decode_envelope(r#"{"success":true,"cartCount":3}"#).unwrap();
        assert_eq!(reply.cart_count, Some(3));
    }

    #[test]
    fn test_decode_envelope_rejected() {
        let err = decode_envelope::<Ack>(r#"{"success":false,"message":"Out of stock"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { message: Some(ref m) } if m == "Out of stock"));
    }

    #[test]
    fn test_missing_success_counts_as_rejected() {
        let err = decode_envelope::<Ack>(r#"{"message":"who knows"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let err = decode_envelope::<Ack>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.is_transport());
    }
}
