/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public FYB adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Clock,
    FixedClock,
    Form,
    FybClient,
    FybClientBuilder,
    FybError,
    Market,
    NoopObserver,
    PendingRequest,
    RateLimiter,
    RawResponse,
    RequestObserver,
    RequestSigner,
    ReqwestTransport,
    Result,
    SystemClock,
    TracingObserver,
    Transport,
};

// Re-export all types
pub use types::*;
