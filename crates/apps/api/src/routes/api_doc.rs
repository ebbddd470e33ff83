use crate::routes::{root, webhook};
use common_services::api::provisioning::interfaces::{
    DealWonPayload, ErrorResponse, ProvisionResponse,
};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        webhook::handlers::deal_won_handler,
    ),
    components(schemas(DealWonPayload, ProvisionResponse, ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Webhooks", description = "CRM workflow webhooks"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "webhook_secret",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
