use crate::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_FRONTEGG_BASE_URL, DEFAULT_HUBSPOT_BASE_URL,
    FRONTEGG_IDENTITY_SUFFIX, RawSettings, non_blank, trim_trailing_slash,
};

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub secrets: SecretSettings,
    pub hubspot: HubSpotSettings,
    pub frontegg: FronteggSettings,
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
}

#[derive(Debug, Clone)]
pub struct SecretSettings {
    /// Shared secret the CRM workflow sends as `Bearer <secret>`.
    /// Unset means every webhook call is rejected.
    pub webhook_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HubSpotSettings {
    pub base_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FronteggSettings {
    pub base_url: String,
    pub identity_base_url: String,
    pub client_id: Option<String>,
    pub api_key: Option<String>,
    pub admin_role_id: Option<String>,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let hubspot_base_url = non_blank(raw.hubspot_base_url)
            .map_or_else(|| DEFAULT_HUBSPOT_BASE_URL.to_owned(), |u| trim_trailing_slash(&u));
        let frontegg_base_url = non_blank(raw.frontegg_base_url)
            .map_or_else(|| DEFAULT_FRONTEGG_BASE_URL.to_owned(), |u| trim_trailing_slash(&u));
        let identity_base_url = non_blank(raw.frontegg_identity_base_url).map_or_else(
            || format!("{frontegg_base_url}{FRONTEGG_IDENTITY_SUFFIX}"),
            |u| trim_trailing_slash(&u),
        );

        Self {
            api: ApiSettings {
                host: non_blank(raw.api_host).unwrap_or_else(|| DEFAULT_API_HOST.to_owned()),
                port: raw.api_port.unwrap_or(DEFAULT_API_PORT),
            },
            secrets: SecretSettings {
                webhook_secret: non_blank(raw.webhook_secret),
            },
            hubspot: HubSpotSettings {
                base_url: hubspot_base_url,
                token: non_blank(raw.hubspot_token),
            },
            frontegg: FronteggSettings {
                base_url: frontegg_base_url,
                identity_base_url,
                client_id: non_blank(raw.frontegg_client_id),
                api_key: non_blank(raw.frontegg_api_key),
                admin_role_id: non_blank(raw.frontegg_admin_role_id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = AppSettings::from(RawSettings::default());

        assert_eq!(settings.api.host, "0.0.0.0");
        assert_eq!(settings.api.port, 3000);
        assert_eq!(settings.secrets.webhook_secret, None);
        assert_eq!(settings.hubspot.base_url, "https://api.hubapi.com");
        assert_eq!(settings.hubspot.token, None);
        assert_eq!(settings.frontegg.base_url, "https://api.frontegg.com");
        assert_eq!(
            settings.frontegg.identity_base_url,
            "https://api.frontegg.com/identity"
        );
        assert_eq!(settings.frontegg.admin_role_id, None);
    }

    #[test]
    fn identity_url_follows_custom_base_url() {
        let settings = AppSettings::from(RawSettings {
            frontegg_base_url: Some("https://api.eu.frontegg.com/".to_owned()),
            ..RawSettings::default()
        });

        assert_eq!(settings.frontegg.base_url, "https://api.eu.frontegg.com");
        assert_eq!(
            settings.frontegg.identity_base_url,
            "https://api.eu.frontegg.com/identity"
        );
    }

    #[test]
    fn explicit_identity_url_wins() {
        let settings = AppSettings::from(RawSettings {
            frontegg_base_url: Some("https://api.frontegg.com".to_owned()),
            frontegg_identity_base_url: Some("https://identity.example.com/".to_owned()),
            ..RawSettings::default()
        });

        assert_eq!(
            settings.frontegg.identity_base_url,
            "https://identity.example.com"
        );
    }

    #[test]
    fn blank_secrets_count_as_unset() {
        let settings = AppSettings::from(RawSettings {
            webhook_secret: Some("  ".to_owned()),
            hubspot_token: Some(String::new()),
            frontegg_admin_role_id: Some("role-1".to_owned()),
            ..RawSettings::default()
        });

        assert_eq!(settings.secrets.webhook_secret, None);
        assert_eq!(settings.hubspot.token, None);
        assert_eq!(settings.frontegg.admin_role_id.as_deref(), Some("role-1"));
    }
}
