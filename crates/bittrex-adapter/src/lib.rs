/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bittrex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod cache;
pub mod http;
pub mod types;

// Re-export commonly used types from cache
pub use cache::{CacheKey, EvictionPolicy, LruCapacity, NeverEvict, ResponseCache};

// Re-export commonly used types from http
pub use http::{
    BittrexClient,
    BittrexError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
    classify,
};

// Re-export all types
pub use types::*;
