use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::models::crm_token::{CrmToken, RefreshResponse};
use crate::services::crm::errors::CrmError;

/// Decoded body of a provider REST call along with the status it came back with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[async_trait]
pub trait CrmApi: Send + Sync {
    async fn refresh_access_token(&self, refresh_token: &str)
        -> Result<RefreshResponse, CrmError>;
    async fn run_report(&self, token: &CrmToken, report_id: &str)
        -> Result<ApiResponse, CrmError>;
    async fn query_accounts(&self, token: &CrmToken) -> Result<ApiResponse, CrmError>;
}
