//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! - [`services::link_service::LinkService`] - Submission and resolution
//! - [`services::auth_service::SecretVerifier`] - Shared-secret comparison

pub mod services;
