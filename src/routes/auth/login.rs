use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::Url;
use tracing::{error, info};

use crate::{config::Config, responses::JsonResponse, state::AppState};

pub const OAUTH_SCOPE: &str = "api refresh_token";

/// User-agent flow, so the provider hands back a refresh token alongside the
/// access token.
pub(crate) fn authorize_url(config: &Config) -> Result<Url, String> {
    let mut url = Url::parse(&format!("{}/authorize", config.login_base_url))
        .map_err(|err| err.to_string())?;
    url.query_pairs_mut()
        .append_pair("response_type", "token")
        .append_pair("client_id", &config.consumer_key)
        .append_pair("redirect_uri", &config.redirect_url)
        .append_pair("scope", OAUTH_SCOPE);
    Ok(url)
}

pub async fn handle_login(State(app_state): State<AppState>) -> Response {
    let url = match authorize_url(&app_state.config) {
        Ok(url) => url,
        Err(err) => {
            error!(error = %err, "unable to build provider authorize URL");
            return JsonResponse::server_error("Unable to build login URL").into_response();
        }
    };

    info!(%url, "Redirecting to the provider login page");
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, url.to_string())],
    )
        .into_response()
}
