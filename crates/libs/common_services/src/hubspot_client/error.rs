use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubSpotError {
    #[error("HubSpot is not configured: {0} is missing")]
    MissingConfiguration(&'static str),

    #[error("Failed to build HubSpot request URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("HubSpot base url cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("HubSpot request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HubSpot {operation} failed ({status}): {body}")]
    Api {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
}
