use crate::config::Config;
use crate::services::crm::service::CrmApi;
use crate::token_store::TokenStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub token_store: Arc<TokenStore>,
    pub crm: Arc<dyn CrmApi>,
}
