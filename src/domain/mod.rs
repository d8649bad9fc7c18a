//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core business data structures
//! - [`mappings`] - In-memory bidirectional slug table
//! - [`slug`] - Slug alphabet, generation, and validation
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod mappings;
pub mod repositories;
pub mod slug;

pub use mappings::Mappings;
