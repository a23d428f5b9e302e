//! HTTP client for the store backend's delivery-area endpoint.
//!
//! Wraps `reqwest` with bearer authorization and classifies each create
//! response as [`CreateOutcome::Created`] (HTTP 201) or
//! [`CreateOutcome::Rejected`]. Transport failures surface as
//! [`ClientError::Http`]. Nothing is retried.

use std::time::Duration;

use areaseed_core::DeliveryAreaPayload;
use reqwest::{Client, StatusCode, Url};

use crate::error::ClientError;

/// Result of a single create request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// Any status other than 201, with the raw response body.
    Rejected { status: u16, body: String },
}

/// Client for `POST /api/delivery-areas`.
///
/// Holds one `reqwest::Client`, the endpoint, and the bearer token, all
/// reused across calls.
pub struct DeliveryAreaClient {
    client: Client,
    endpoint: Url,
    api_token: String,
}

impl DeliveryAreaClient {
    /// Creates a client that posts to `endpoint` with `api_token` as the
    /// bearer credential.
    ///
    /// With `timeout_secs` set to `None` the client has no overall request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if `endpoint` does not parse
    /// as an absolute URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        endpoint: &str,
        api_token: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let endpoint_url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
            api_token: api_token.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one create request for `payload`.
    ///
    /// The body is sent as JSON (`Content-Type: application/json`) with an
    /// `Authorization: Bearer` header. Error bodies are returned verbatim,
    /// never parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on connection, DNS, or timeout failure,
    /// or if the response body cannot be read.
    pub async fn create_delivery_area(
        &self,
        payload: &DeliveryAreaPayload,
    ) -> Result<CreateOutcome, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            tracing::debug!(wilaya = %payload.wilaya, "delivery area created");
            return Ok(CreateOutcome::Created);
        }

        let body = response.text().await?;
        tracing::warn!(
            wilaya = %payload.wilaya,
            status = status.as_u16(),
            "delivery area rejected"
        );
        Ok(CreateOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
