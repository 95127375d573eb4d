use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::{
    responses::JsonResponse,
    services::crm::{errors::CrmError, service::ApiResponse},
    state::AppState,
};

pub async fn run_report(State(app_state): State<AppState>, Path(id): Path<String>) -> Response {
    let token = app_state.token_store.get_or_default().await;
    relay(app_state.crm.run_report(&token, &id).await)
}

pub async fn get_accounts(State(app_state): State<AppState>) -> Response {
    let token = app_state.token_store.get_or_default().await;
    relay(app_state.crm.query_accounts(&token).await)
}

/// Passes the provider's status and decoded JSON through unchanged.
fn relay(result: Result<ApiResponse, CrmError>) -> Response {
    match result {
        Ok(ApiResponse { status, body }) => (status, Json(body)).into_response(),
        Err(CrmError::Decode(err)) => {
            error!(error = %err, "Unable to decode JSON from body");
            JsonResponse::unprocessable_entity("Unable to decode JSON from body").into_response()
        }
        Err(err) => {
            error!(error = %err, "Error calling the provider API endpoint");
            JsonResponse::server_error(&err.to_string()).into_response()
        }
    }
}
