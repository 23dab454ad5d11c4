//! Minimal outbound HTTP client used for service-to-service calls.
//!
//! Built on the hyper-util legacy client with a plain-HTTP connector; the
//! clinic services talk to each other inside a private network. One bounded
//! timeout per request, no retries.

mod client;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use error::HttpError;
pub use request::RequestBuilder;
pub use response::HttpResponse;
