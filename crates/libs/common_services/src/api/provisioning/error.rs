use crate::frontegg_client::FronteggError;
use crate::hubspot_client::HubSpotError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ProvisioningError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error(transparent)]
    HubSpot(#[from] HubSpotError),

    #[error(transparent)]
    Frontegg(#[from] FronteggError),
}

fn log_failure(error: &ProvisioningError) {
    match error {
        ProvisioningError::Unauthorized => warn!("Rejected webhook call with bad credentials"),
        ProvisioningError::BadRequest(message) => warn!("Rejected webhook payload: {message}"),
        ProvisioningError::Unprocessable(message) => {
            warn!("Deal cannot be provisioned: {message}");
        }
        ProvisioningError::HubSpot(e) => error!("HubSpot integration failed: {e}"),
        ProvisioningError::Frontegg(e) => error!("Frontegg integration failed: {e}"),
    }
}

impl IntoResponse for ProvisioningError {
    fn into_response(self) -> Response {
        log_failure(&self);

        let (status, body) = match &self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": "unauthorized" })),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "bad_request", "message": message }),
            ),
            Self::Unprocessable(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "unprocessable", "message": message }),
            ),
            Self::HubSpot(_) | Self::Frontegg(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "internal_error", "detail": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
