/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and decoded JSON results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod market;
pub mod public;
pub mod signature;

pub use error::{BittrexError, Result};
pub use signature::RequestSigner;

pub use client::{BittrexClient, ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use endpoints::classify;
