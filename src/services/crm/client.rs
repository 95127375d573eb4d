use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::crm_token::{CrmToken, RefreshResponse};
use crate::services::crm::{
    errors::CrmError,
    service::{ApiResponse, CrmApi},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const ACCOUNTS_QUERY: &str = "SELECT name from Account";

pub struct CrmClient {
    client: Client,
    login_base_url: String,
    consumer_key: String,
    consumer_secret: String,
    api_version: String,
}

impl CrmClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            login_base_url: config.login_base_url.clone(),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            api_version: config.api_version.clone(),
        }
    }

    /// Shared outbound client; every provider call is bounded by [`REQUEST_TIMEOUT`].
    pub fn http_client() -> Result<Client, reqwest::Error> {
        Client::builder().timeout(REQUEST_TIMEOUT).build()
    }

    fn api_url(&self, instance_url: &str, path: &str) -> String {
        format!(
            "{}/services/data/{}/{}",
            instance_url.trim_end_matches('/'),
            self.api_version,
            path.trim_start_matches('/')
        )
    }

    async fn api_get(
        &self,
        token: &CrmToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, CrmError> {
        let url = self.api_url(&token.instance_url, path);
        if !token.is_usable() {
            warn!(%url, "calling provider API without a captured token");
        }
        info!(%url, "calling provider API");

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&token.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|err| {
                warn!(%url, error = %err, "Error calling the provider API endpoint")
            })?;

        let status = response.status();
        let body = decode_json(response).await?;
        Ok(ApiResponse { status, body })
    }
}

/// The id is used verbatim apart from being escaped as one path segment.
fn report_path(report_id: &str) -> String {
    format!("analytics/reports/{}", urlencoding::encode(report_id))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, CrmError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| CrmError::Decode(err.to_string()))
}

fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct OAuthErrorBody {
        error: Option<String>,
        error_description: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<OAuthErrorBody>(body) {
        if let Some(message) = parsed.error_description.or(parsed.error) {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }

    let fallback = body.trim();
    if fallback.is_empty() {
        "token refresh failed".to_string()
    } else {
        fallback.to_string()
    }
}

#[async_trait]
impl CrmApi for CrmClient {
    async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshResponse, CrmError> {
        if refresh_token.is_empty() {
            return Err(CrmError::MissingRefreshToken);
        }

        let token_url = format!("{}/token", self.login_base_url);
        info!(%token_url, "exchanging refresh token");

        // Credentials travel in the query string, so the URL is stripped from
        // any transport error before it can reach a log line or response.
        let response = self
            .client
            .post(&token_url)
            .query(&[
                ("grant_type", "refresh_token"),
                ("client_id", self.consumer_key.as_str()),
                ("client_secret", self.consumer_secret.as_str()),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(|err| CrmError::Http(err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CrmError::Rejected {
                status,
                message: extract_error_message(&body),
            });
        }

        decode_json(response).await
    }

    async fn run_report(
        &self,
        token: &CrmToken,
        report_id: &str,
    ) -> Result<ApiResponse, CrmError> {
        self.api_get(token, &report_path(report_id), &[("includeDetails", "true")])
            .await
    }

    async fn query_accounts(&self, token: &CrmToken) -> Result<ApiResponse, CrmError> {
        self.api_get(token, "query/", &[("q", ACCOUNTS_QUERY)]).await
    }
}
