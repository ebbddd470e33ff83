use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FronteggError {
    #[error("Frontegg is not configured: {0} is missing")]
    MissingConfiguration(&'static str),

    #[error("Failed to build Frontegg request URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Frontegg base url cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("Frontegg request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Frontegg {operation} failed ({status}): {body}")]
    Api {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Frontegg vendor auth response did not contain a token")]
    MissingToken,
}
