use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Short-lived vendor token for the Frontegg management APIs.
#[derive(Clone)]
pub struct ManagementToken(pub(crate) String);

impl ManagementToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ManagementToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ManagementToken(..)")
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VendorAuthRequest<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VendorAuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTenantRequest<'a> {
    pub tenant_id: &'a str,
    pub name: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct BulkInviteRequest<'a> {
    pub users: Vec<InvitedUser<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvitedUser<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<&'a str>>,
}

/// Result of an idempotent create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    /// The platform answered 409: the tenant or invitation is already there.
    AlreadyExists,
    Failed { status: StatusCode, body: String },
}

impl ProvisionOutcome {
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status.is_success() {
            Self::Created
        } else if status == StatusCode::CONFLICT {
            Self::AlreadyExists
        } else {
            Self::Failed { status, body }
        }
    }
}
