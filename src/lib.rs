//! Client binding for the esa.io REST API.
//!
//! Responses carry the `X-RateLimit-*` state the server reported, parsed by
//! [`rate_limit::extract_rate_limit`].

pub mod config;
pub mod error;
pub mod http;
pub mod rate_limit;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use http::{rest_get_json, ErrorInfo, RestResponse};
pub use rate_limit::{extract_rate_limit, RateLimitInfo, Timestamp};
pub use types::PaginationParameters;
