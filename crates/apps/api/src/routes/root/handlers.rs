#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Root message")
    )
)]
pub async fn root() -> &'static str {
    "Deal provisioning webhook"
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is up and accepting webhooks", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
