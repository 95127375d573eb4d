use serde::{Deserialize, Serialize};

/// Token data returned by the provider's user-agent flow, captured from the
/// redirect fragment. Every field is kept exactly as the provider sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmToken {
    pub access_token: String,
    pub expires_in: String,
    pub refresh_token: String,
    pub state: String,
    pub instance_url: String,
    pub id: String,
    pub issued_at: String,
    pub signature: String,
}

impl CrmToken {
    /// Proxy calls need both an instance to talk to and a bearer token.
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty() && !self.instance_url.is_empty()
    }

    /// Folds a refresh exchange into this token. The refresh response never
    /// carries a new refresh token, so the existing one is kept.
    pub fn apply_refresh(&mut self, refreshed: &RefreshResponse) {
        self.access_token = refreshed.access_token.clone();
        self.instance_url = refreshed.instance_url.clone();
        self.id = refreshed.id.clone();
        self.issued_at = refreshed.issued_at.clone();
        self.signature = refreshed.signature.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub instance_url: String,
    #[serde(default)]
    pub issued_at: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub signature: String,
}
