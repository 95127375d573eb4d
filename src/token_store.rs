use tokio::sync::RwLock;

use crate::models::crm_token::{CrmToken, RefreshResponse};

/// Holds the most recently captured provider token for the life of the
/// process. Starts empty and is only ever overwritten, never cleared.
#[derive(Debug, Default)]
pub struct TokenStore {
    current: RwLock<Option<CrmToken>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<CrmToken> {
        self.current.read().await.clone()
    }

    /// Empty record when nothing has been captured yet.
    pub async fn get_or_default(&self) -> CrmToken {
        self.get().await.unwrap_or_default()
    }

    /// Last writer wins; no merging with the previous record.
    pub async fn set(&self, token: CrmToken) {
        *self.current.write().await = Some(token);
    }

    /// Merges a refresh exchange into the held token under a single write
    /// lock, creating a record around `refresh_token` if none exists yet.
    pub async fn apply_refresh(
        &self,
        refreshed: &RefreshResponse,
        refresh_token: &str,
    ) -> CrmToken {
        let mut guard = self.current.write().await;
        let token = guard.get_or_insert_with(|| CrmToken {
            refresh_token: refresh_token.to_string(),
            ..CrmToken::default()
        });
        token.apply_refresh(refreshed);
        token.clone()
    }
}
