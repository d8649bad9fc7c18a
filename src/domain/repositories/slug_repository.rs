//! Repository trait for slug mappings.

use async_trait::async_trait;

use crate::domain::entities::{NewMapping, Submission};
use crate::error::StoreError;

/// Storage interface for slug ↔ URL mappings.
///
/// Reads may run concurrently. [`SlugRepository::submit`] is a single atomic
/// step: no other submission can interleave between the duplicate check, the
/// slug allocation, the insert and the write to durable storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileSlugRepository`] - flat-file store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Finds the target URL of a slug.
    async fn find_by_slug(&self, slug: &str) -> Option<String>;

    /// Finds the slug already assigned to a URL.
    async fn find_by_url(&self, url: &str) -> Option<String>;

    /// Returns the existing mapping for the URL, or allocates and stores a
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugSpaceExhausted`] if no free slug was found.
    /// Failures to write durable storage are logged, not returned.
    async fn submit(&self, new_mapping: NewMapping) -> Result<Submission, StoreError>;

    /// Number of stored mappings.
    async fn count(&self) -> usize;
}
