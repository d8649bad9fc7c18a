//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - Request payloads
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
