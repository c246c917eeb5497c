//! HTTP client for the HubSpot CRM API.

use serde::{Deserialize, Serialize};
use serde_json::json;

use accsync_core::hubspot::ContactProperties;

/// Default API host for HubSpot private-app tokens.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Env var holding the private-app token.
pub const TOKEN_ENV: &str = "HUBSPOT_PRIVATE_APP_TOKEN";

/// Env var overriding the API host (used by tests against a stub).
pub const BASE_URL_ENV: &str = "HUBSPOT_BASE_URL";

/// Errors from the HubSpot client.
#[derive(Debug, thiserror::Error)]
pub enum HubSpotError {
    /// The private-app token env var is not set.
    #[error("Missing {TOKEN_ENV}")]
    MissingToken,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// HubSpot returned a non-2xx status code.
    #[error("HubSpot API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Result of one contact upsert.
#[derive(Debug, Clone)]
pub struct ContactUpsert {
    /// Remote contact id, when the response carried one.
    pub hubspot_id: Option<String>,
}

/// Account details returned by the health probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub portal_id: i64,
    pub time_zone: String,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct BatchUpsertResponse {
    #[serde(default)]
    results: Vec<BatchUpsertResult>,
}

#[derive(Debug, Deserialize)]
struct BatchUpsertResult {
    id: Option<String>,
}

/// HTTP client for one HubSpot portal.
pub struct HubSpotClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HubSpotClient {
    /// Create a client with an explicit base URL and token.
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(http: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Build a client from `HUBSPOT_PRIVATE_APP_TOKEN` and the optional
    /// `HUBSPOT_BASE_URL` override.
    pub fn from_env() -> Result<Self, HubSpotError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| HubSpotError::MissingToken)?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, token))
    }

    /// Base API URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upsert a contact keyed by email.
    ///
    /// Sends `POST /crm/v3/objects/contacts/batch/upsert` with a single
    /// input whose `idProperty` is `email`. Properties absent from the
    /// bag are left untouched remotely (partial update).
    pub async fn upsert_contact_by_email(
        &self,
        email: &str,
        properties: &ContactProperties,
    ) -> Result<ContactUpsert, HubSpotError> {
        let url = format!("{}/crm/v3/objects/contacts/batch/upsert", self.base_url);
        let body = json!({
            "inputs": [{
                "idProperty": "email",
                "id": email,
                "properties": properties,
            }]
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: BatchUpsertResponse = response.json().await?;
        let hubspot_id = parsed.results.into_iter().next().and_then(|r| r.id);

        tracing::debug!(email = %email, hubspot_id = ?hubspot_id, "Upserted HubSpot contact");
        Ok(ContactUpsert { hubspot_id })
    }

    /// Lightweight read-only probe of the configured portal.
    pub async fn account_health(&self) -> Result<AccountInfo, HubSpotError> {
        let url = format!("{}/account-info/v3/details", self.base_url);
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-2xx response into [`HubSpotError::Api`] with the raw
    /// body preserved for the audit trail.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, HubSpotError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(HubSpotError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = HubSpotError::Api {
            status: 401,
            body: "invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "HubSpot API error (401): invalid token");
    }

    #[test]
    fn batch_response_tolerates_missing_results() {
        let parsed: BatchUpsertResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());

        let parsed: BatchUpsertResponse =
            serde_json::from_str(r#"{"results":[{"id":"12345"}]}"#).unwrap();
        assert_eq!(parsed.results[0].id.as_deref(), Some("12345"));
    }
}
