use crate::api_state::ApiContext;
use crate::webhook::handlers::deal_won_handler;
use axum::{Router, routing::post};

pub const DEAL_WON_PATH: &str = "/webhooks/hubspot/deal-won";

pub fn webhook_router() -> Router<ApiContext> {
    Router::new().route(DEAL_WON_PATH, post(deal_won_handler))
}
