use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::models::crm_token::CrmToken;

type HmacSha256 = Hmac<Sha256>;

/// Base64 HMAC-SHA256 of `id + issued_at`, keyed with the consumer secret.
pub fn compute_token_signature(consumer_secret: &str, id: &str, issued_at: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(consumer_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(id.as_bytes());
    mac.update(issued_at.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

pub fn verify_token_signature(consumer_secret: &str, token: &CrmToken) -> bool {
    if token.signature.is_empty() {
        return false;
    }
    let expected = compute_token_signature(consumer_secret, &token.id, &token.issued_at);
    expected.as_bytes().ct_eq(token.signature.as_bytes()).into()
}
