pub const DEFAULT_HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";
pub const DEFAULT_FRONTEGG_BASE_URL: &str = "https://api.frontegg.com";

/// Path appended to the Frontegg base url when no identity url is configured.
pub const FRONTEGG_IDENTITY_SUFFIX: &str = "/identity";

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u32 = 3000;
