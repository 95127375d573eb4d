use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{
    models::crm_token::CrmToken, responses::JsonResponse, state::AppState,
    utils::signature::verify_token_signature,
};

/// Missing parameters become empty strings; whatever the provider put in the
/// fragment is accepted as-is.
pub(crate) fn token_from_params(params: &HashMap<String, String>) -> CrmToken {
    let get = |key: &str| params.get(key).cloned().unwrap_or_default();
    CrmToken {
        access_token: get("access_token"),
        expires_in: get("expires_in"),
        refresh_token: get("refresh_token"),
        state: get("state"),
        instance_url: get("instance_url"),
        id: get("id"),
        issued_at: get("issued_at"),
        signature: get("signature"),
    }
}

pub async fn handle_parse(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    info!("Received response from capture page POST with token info");

    let token = token_from_params(&params);

    if app_state.config.verify_signature
        && !verify_token_signature(&app_state.config.consumer_secret, &token)
    {
        warn!(id = %token.id, issued_at = %token.issued_at, "token signature mismatch");
        return JsonResponse::unauthorized("Token signature could not be verified")
            .into_response();
    }

    app_state.token_store.set(token.clone()).await;
    info!(
        instance_url = %token.instance_url,
        issued_at = %token.issued_at,
        has_refresh_token = !token.refresh_token.is_empty(),
        "stored provider token"
    );

    Json(token).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_from_params_copies_present_and_blanks_missing() {
        let params = HashMap::from([
            ("access_token".to_string(), "abc".to_string()),
            ("instance_url".to_string(), "https://x.example".to_string()),
            ("unrelated".to_string(), "ignored".to_string()),
        ]);

        let token = token_from_params(&params);

        assert_eq!(
            token,
            CrmToken {
                access_token: "abc".into(),
                instance_url: "https://x.example".into(),
                ..CrmToken::default()
            }
        );
    }
}
