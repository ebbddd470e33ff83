use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use tracing::{info, warn};

/// Reads `.env`, the optional `config/settings.yaml` and the process environment, in
/// increasing order of precedence.
pub fn load_app_settings() -> Result<AppSettings> {
    dotenv::from_path(".env").ok();

    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/settings").required(false))
        .add_source(config::Environment::default());

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    let settings: AppSettings = raw_settings.into();

    report_missing(&settings);
    Ok(settings)
}

fn report_missing(settings: &AppSettings) {
    let required = [
        ("WEBHOOK_SECRET", settings.secrets.webhook_secret.is_some()),
        ("HUBSPOT_TOKEN", settings.hubspot.token.is_some()),
        ("FRONTEGG_CLIENT_ID", settings.frontegg.client_id.is_some()),
        ("FRONTEGG_API_KEY", settings.frontegg.api_key.is_some()),
    ];
    for (name, present) in required {
        if !present {
            warn!("{name} is not set, webhook calls will fail until it is configured");
        }
    }
    info!(
        hubspot = %settings.hubspot.base_url,
        frontegg = %settings.frontegg.base_url,
        identity = %settings.frontegg.identity_base_url,
        "Settings loaded"
    );
}
