//! # Slug Shortener
//!
//! A minimal URL shortening service built with Axum. A long URL plus a shared
//! secret is exchanged for a short random slug; the slug then permanently
//! redirects to the URL. Mappings live in memory and are rewritten to a flat
//! file after every new link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, slug rules, bidirectional table
//! - **Application Layer** ([`application`]) - Submission and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat-file storage
//! - **API Layer** ([`api`]) - Handlers, form DTO, and middleware
//!
//! ## HTTP Surface
//!
//! - `POST /submit` with form fields `secret`, `url`, `slug` (optional)
//! - `GET|HEAD /{slug}` → `301` to the stored URL, `404` otherwise
//!
//! ## Quick Start
//!
//! ```bash
//! export SECRET="something-long"
//! cargo run -- --server-name https://s.example.com
//!
//! curl -d secret=something-long -d url=https://example.com http://localhost:9997/submit
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::Mappings;
    pub use crate::domain::entities::{Mapping, NewMapping, Submission};
    pub use crate::domain::repositories::SlugRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::FileSlugRepository;
    pub use crate::state::AppState;
}
