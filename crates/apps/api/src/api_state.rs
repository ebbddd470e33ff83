use app_state::AppSettings;
use common_services::frontegg_client::FronteggClient;
use common_services::hubspot_client::HubSpotClient;
use reqwest::Client;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub hubspot: HubSpotClient,
    pub frontegg: FronteggClient,
}

impl ApiContext {
    /// Both clients share one connection pool.
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let http_client = Client::new();
        Self {
            hubspot: HubSpotClient::new(http_client.clone(), &settings.hubspot),
            frontegg: FronteggClient::new(http_client, &settings.frontegg),
            settings,
        }
    }
}
