//! Authenticating gateway.
//!
//! Single ingress for the clinic network. Every request passes three gates
//! in order: authentication (bearer credential against the trusted issuer),
//! authorization (ordered role policy table), routing (first path segment
//! resolved through the service registry, request forwarded verbatim).
//! Public paths (health, docs) skip the first two gates. The backend
//! response is relayed unmodified, error bodies included.

pub mod middleware;
pub mod proxy;
pub mod routes;

pub use routes::{router, GatewayState};
