use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::{responses::JsonResponse, routes::TOKEN_PARSE_PATH, state::AppState};

pub const RECEIVE_TEMPLATE: &str = "receive_oauth_token.html";
const PARSE_PATH_PLACEHOLDER: &str = "{{parse_path}}";

/// The provider delivers the token in the URL fragment, which browsers never
/// send to the server. The page served here reads `location.hash` and POSTs
/// it back to the parse endpoint as a query string.
pub async fn handle_receive(State(app_state): State<AppState>) -> Response {
    info!("Received response from provider with token info");

    let path = app_state.config.templates_dir.join(RECEIVE_TEMPLATE);
    let template = match tokio::fs::read_to_string(&path).await {
        Ok(template) => template,
        Err(err) => {
            error!(path = %path.display(), error = %err, "unable to load token capture page");
            return JsonResponse::server_error("Unable to load token capture page")
                .into_response();
        }
    };

    info!("Rendering form to callback with fragment URL token info via POST");
    Html(template.replace(PARSE_PATH_PLACEHOLDER, TOKEN_PARSE_PATH)).into_response()
}
