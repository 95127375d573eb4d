use std::sync::Mutex;

use super::{
    errors::CrmError,
    service::{ApiResponse, CrmApi},
};
use crate::models::crm_token::{CrmToken, RefreshResponse};

/// Records every call and answers with canned values; `None` stands in for a
/// body the provider sent that was not JSON.
#[derive(Default)]
pub struct MockCrmApi {
    pub refresh_response: Option<RefreshResponse>,
    pub api_response: Option<ApiResponse>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCrmApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn api(&self) -> Result<ApiResponse, CrmError> {
        self.api_response
            .clone()
            .ok_or_else(|| CrmError::Decode("expected value at line 1 column 1".into()))
    }
}

#[async_trait::async_trait]
impl CrmApi for MockCrmApi {
    async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshResponse, CrmError> {
        self.record(format!("refresh:{refresh_token}"));
        if refresh_token.is_empty() {
            return Err(CrmError::MissingRefreshToken);
        }
        self.refresh_response
            .clone()
            .ok_or_else(|| CrmError::Decode("expected value at line 1 column 1".into()))
    }

    async fn run_report(
        &self,
        token: &CrmToken,
        report_id: &str,
    ) -> Result<ApiResponse, CrmError> {
        self.record(format!(
            "report:{}:{}:{}",
            token.instance_url, token.access_token, report_id
        ));
        self.api()
    }

    async fn query_accounts(&self, token: &CrmToken) -> Result<ApiResponse, CrmError> {
        self.record(format!("accounts:{}:{}", token.instance_url, token.access_token));
        self.api()
    }
}
