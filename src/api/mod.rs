//! Talking to the pizza collection endpoint
//!
//! - `error`: the single error type every failed call ends up as
//! - `gateway`: one call in, parsed payload or normalized error out
//! - `http`: the `Transport` seam and its reqwest implementation

mod error;
mod gateway;
mod http;

pub use error::ApiError;
pub use gateway::api_call;
pub use http::{ApiRequest, HttpTransport, RawResponse, Transport};
pub(crate) use http::resource_url;
