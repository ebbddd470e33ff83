pub mod client;
pub mod error;
pub mod interfaces;

pub use client::FronteggClient;
pub use error::FronteggError;
pub use interfaces::ProvisionOutcome;
