pub mod client;
pub mod error;
pub mod interfaces;
pub mod primary;

pub use client::HubSpotClient;
pub use error::HubSpotError;
