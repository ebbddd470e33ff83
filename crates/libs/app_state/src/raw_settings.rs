use serde::Deserialize;

/// Flat view of the environment, one field per variable (lowercased).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawSettings {
    pub webhook_secret: Option<String>,
    pub hubspot_token: Option<String>,
    pub hubspot_base_url: Option<String>,
    pub frontegg_base_url: Option<String>,
    pub frontegg_identity_base_url: Option<String>,
    pub frontegg_client_id: Option<String>,
    pub frontegg_api_key: Option<String>,
    pub frontegg_admin_role_id: Option<String>,
    pub api_host: Option<String>,
    pub api_port: Option<u32>,
}
