#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception
)]

pub mod api;
pub mod frontegg_client;
pub mod hubspot_client;
