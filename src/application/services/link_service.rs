//! Link submission and resolution service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::services::SecretVerifier;
use crate::domain::entities::{NewMapping, Submission};
use crate::domain::repositories::SlugRepository;
use crate::error::AppError;

/// Service behind the submit and redirect endpoints.
///
/// Checks the shared secret, deduplicates by target URL through the
/// repository, and formats short URLs against the public server name.
pub struct LinkService {
    repository: Arc<dyn SlugRepository>,
    verifier: SecretVerifier,
    server_name: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `repository` - slug store
    /// - `secret` - shared secret submitters must present
    /// - `server_name` - public base URL, e.g. `http://localhost`
    pub fn new(
        repository: Arc<dyn SlugRepository>,
        secret: &str,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            verifier: SecretVerifier::new(secret),
            server_name: server_name.into(),
        }
    }

    /// Shortens `url`, returning the full short URL.
    ///
    /// A URL that was shortened before gets its existing slug back and the
    /// store is not written. An empty `requested_slug` counts as none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the secret is wrong or the URL
    /// is empty; the store is not touched in that case.
    ///
    /// Returns [`AppError::Internal`] if the slug space is exhausted.
    pub async fn submit(
        &self,
        secret: &str,
        url: String,
        requested_slug: Option<String>,
    ) -> Result<String, AppError> {
        if !self.verifier.verify(secret) || url.is_empty() {
            warn!(empty_url = url.is_empty(), "Rejected submission");
            return Err(AppError::Unauthorized);
        }

        let new_mapping = NewMapping {
            url,
            requested_slug: requested_slug.filter(|s| !s.is_empty()),
        };

        let submission = self.repository.submit(new_mapping).await?;

        if let Submission::Created(mapping) = &submission {
            info!(slug = %mapping.slug, url = %mapping.url, "Added new shortening");
        }

        Ok(submission.mapping().short_url(&self.server_name))
    }

    /// Returns the target URL of `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is unknown.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        self.repository
            .find_by_slug(slug)
            .await
            .ok_or(AppError::NotFound)
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}
