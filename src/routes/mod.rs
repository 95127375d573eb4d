pub mod api;
pub mod auth;


use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::services::crm::client::REQUEST_TIMEOUT;
use crate::state::AppState;
use api::{get_accounts, run_report};
use auth::{handle_login, handle_parse, handle_receive, handle_refresh};

pub const TOKEN_PARSE_PATH: &str = "/token/parse";

/// Has to outlast [`REQUEST_TIMEOUT`] so a hung provider call ends in the
/// handler's JSON error rather than a bare 408 from the layer.
pub const SERVER_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT.as_secs() + 5);

pub fn router(state: AppState) -> Router {
    // The receive path has to match the redirect URL registered with the provider.
    let auth_routes = Router::new()
        .route("/login", get(handle_login))
        .route("/token/receive", get(handle_receive))
        .route(TOKEN_PARSE_PATH, post(handle_parse))
        .route("/token/refresh", get(handle_refresh));

    let api_routes = Router::new()
        .route("/reports/run/{id}", get(run_report))
        .route("/accounts", get(get_accounts));

    Router::new()
        .merge(auth_routes)
        .nest("/api/v1", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(SERVER_TIMEOUT))
}
