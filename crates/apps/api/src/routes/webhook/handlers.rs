use crate::api_state::ApiContext;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use common_services::api::provisioning::error::ProvisioningError;
use common_services::api::provisioning::interfaces::{
    DealWonPayload, ErrorResponse, ProvisionResponse,
};
use common_services::api::provisioning::service::{authorize, parse_deal_id, provision_deal};
use tracing::{info, instrument};

/// Provision a Frontegg tenant and admin for a won HubSpot deal.
///
/// The body is read raw so malformed JSON maps to our own 400 instead of axum's rejection.
#[utoipa::path(
    post,
    path = "/webhooks/hubspot/deal-won",
    tag = "Webhooks",
    request_body = DealWonPayload,
    security(("webhook_secret" = [])),
    responses(
        (status = 200, description = "Tenant exists and the contact is invited", body = ProvisionResponse),
        (status = 400, description = "Body is not JSON or has no deal id", body = ErrorResponse),
        (status = 401, description = "Missing or wrong webhook secret", body = ErrorResponse),
        (status = 422, description = "Deal has no company, contact, or contact email", body = ErrorResponse),
        (status = 500, description = "HubSpot or Frontegg call failed", body = ErrorResponse),
    )
)]
#[instrument(skip(context, headers, body))]
pub async fn deal_won_handler(
    State(context): State<ApiContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ProvisionResponse>, ProvisioningError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    authorize(
        authorization,
        context.settings.secrets.webhook_secret.as_deref(),
    )?;

    let deal_id = parse_deal_id(&body)?;
    info!(%deal_id, "Provisioning won deal");

    let response = provision_deal(&context.hubspot, &context.frontegg, &deal_id).await?;
    Ok(Json(response))
}
