use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use crate::{responses::JsonResponse, state::AppState};

pub async fn handle_refresh(State(app_state): State<AppState>) -> Response {
    let refresh_token = app_state.config.refresh_token.as_str();
    if refresh_token.is_empty() {
        warn!("refresh requested but no refresh token is configured");
        return JsonResponse::forbidden("Refresh token is not configured").into_response();
    }

    let refreshed = match app_state.crm.refresh_access_token(refresh_token).await {
        Ok(refreshed) => refreshed,
        Err(err) => {
            error!(error = %err, "token refresh failed");
            return JsonResponse::server_error(&err.to_string()).into_response();
        }
    };

    if app_state.config.sync_refreshed_token {
        let held = app_state
            .token_store
            .apply_refresh(&refreshed, refresh_token)
            .await;
        info!(instance_url = %held.instance_url, "stored refreshed provider token");
    } else {
        info!(instance_url = %refreshed.instance_url, "refreshed provider token");
    }

    Json(refreshed).into_response()
}
