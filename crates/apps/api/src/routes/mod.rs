mod api_doc;
pub mod root;
pub mod webhook;

use crate::api_state::ApiContext;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::webhook::router::webhook_router;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(root_public_router())
        .merge(webhook_router())
        .with_state(api_state)
}
