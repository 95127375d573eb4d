use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("refresh token is not configured")]
    MissingRefreshToken,
    #[error("error calling the provider API: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider responded with status {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("unable to decode JSON from provider response: {0}")]
    Decode(String),
}
