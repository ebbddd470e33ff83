use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Prefix that turns a HubSpot company id into a Frontegg tenant id.
pub const TENANT_ID_PREFIX: &str = "hsco-";

/// Body HubSpot workflows send. Either field may carry the deal id, as string or number.
#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DealWonPayload {
    #[schema(value_type = Option<String>, example = "555")]
    pub deal_id: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub object_id: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionResponse {
    pub ok: bool,
    pub tenant_id: String,
    /// Email the admin invitation was sent to.
    pub invited: String,
    pub company_name: String,
    pub company_domain: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: Option<String>,
    pub detail: Option<String>,
}

#[must_use]
pub fn tenant_id_for_company(company_id: &str) -> String {
    format!("{TENANT_ID_PREFIX}{company_id}")
}
