/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod executor;
pub mod public;
pub mod request;
pub mod response;
pub mod signature;
pub mod throttle;
pub mod trade;
pub mod transport;

pub use error::{FybError, Result};
pub use executor::{NoopObserver, RequestObserver, TimedExecutor, TracingObserver};
pub use request::{Clock, FixedClock, Form, PendingRequest, RequestBuilder, SystemClock};
pub use response::{decode_json, decode_response, permission_error};
pub use signature::{RequestSigner, sign};
pub use throttle::{REQUEST_INTERVAL, RateLimiter};
pub use transport::{RawResponse, ReqwestTransport, Transport};

pub use client::{
    ClientConfig, DEFAULT_TIMEOUT, FybClient, FybClientBuilder, Market, SEK_BASE_URL,
    SGD_BASE_URL, TEST_BASE_URL,
};
