use super::error::FronteggError;
use super::interfaces::{
    BulkInviteRequest, CreateTenantRequest, InvitedUser, ManagementToken, ProvisionOutcome,
    VendorAuthRequest, VendorAuthResponse,
};
use app_state::FronteggSettings;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

/// Header Frontegg uses to scope identity calls to a tenant.
pub const TENANT_HEADER: &str = "frontegg-tenant-id";

#[derive(Clone)]
pub struct FronteggClient {
    http_client: Client,
    base_url: String,
    identity_base_url: String,
    client_id: Option<String>,
    api_key: Option<String>,
    admin_role_id: Option<String>,
}

impl FronteggClient {
    #[must_use]
    pub fn new(http_client: Client, settings: &FronteggSettings) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.clone(),
            identity_base_url: settings.identity_base_url.clone(),
            client_id: settings.client_id.clone(),
            api_key: settings.api_key.clone(),
            admin_role_id: settings.admin_role_id.clone(),
        }
    }

    fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, FronteggError> {
        let mut url: Url = base_url.parse()?;
        url.path_segments_mut()
            .map_err(|()| FronteggError::InvalidBaseUrl(base_url.to_owned()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Exchanges the configured client id and API key for a management token.
    #[instrument(skip(self))]
    pub async fn management_token(&self) -> Result<ManagementToken, FronteggError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(FronteggError::MissingConfiguration("FRONTEGG_CLIENT_ID"))?;
        let secret = self
            .api_key
            .as_deref()
            .ok_or(FronteggError::MissingConfiguration("FRONTEGG_API_KEY"))?;
        let url = Self::endpoint(&self.base_url, &["auth", "vendor"])?;

        let response = self
            .http_client
            .post(url)
            .json(&VendorAuthRequest { client_id, secret })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FronteggError::Api {
                operation: "vendor token exchange",
                status,
                body,
            });
        }

        let auth: VendorAuthResponse = response.json().await?;
        let token = auth
            .token
            .filter(|t| !t.is_empty())
            .ok_or(FronteggError::MissingToken)?;
        debug!(expires_in = ?auth.expires_in, "Obtained Frontegg management token");

        Ok(ManagementToken(token))
    }

    /// Creates the tenant. A 409 comes back as [`ProvisionOutcome::AlreadyExists`].
    #[instrument(skip(self, token))]
    pub async fn create_tenant(
        &self,
        token: &ManagementToken,
        tenant_id: &str,
        name: &str,
    ) -> Result<ProvisionOutcome, FronteggError> {
        let url = Self::endpoint(
            &self.base_url,
            &["tenants", "resources", "tenants", "v1"],
        )?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token.as_str())
            .json(&CreateTenantRequest { tenant_id, name })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ProvisionOutcome::from_status(status, body))
    }

    /// Invites `email` into the tenant, attaching the configured admin role when there is one.
    #[instrument(skip(self, token))]
    pub async fn invite_admin(
        &self,
        token: &ManagementToken,
        tenant_id: &str,
        email: &str,
    ) -> Result<ProvisionOutcome, FronteggError> {
        let url = Self::endpoint(
            &self.identity_base_url,
            &["resources", "users", "bulk", "v1", "invite"],
        )?;
        let request = BulkInviteRequest {
            users: vec![InvitedUser {
                email,
                role_ids: self.admin_role_id.as_deref().map(|role| vec![role]),
            }],
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token.as_str())
            .header(TENANT_HEADER, tenant_id)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ProvisionOutcome::from_status(status, body))
    }
}
