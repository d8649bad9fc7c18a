//! Flat-file implementation of the slug repository.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::error;

use crate::domain::Mappings;
use crate::domain::entities::{NewMapping, Submission};
use crate::domain::repositories::SlugRepository;
use crate::error::StoreError;
use crate::infrastructure::persistence::flat_file;

/// Slug store backed by an in-memory [`Mappings`] table and a flat file.
///
/// A single reader/writer lock covers both directions of the table. Lookups
/// share the read lock; a submission holds the write lock across the
/// duplicate check, the insert and the file rewrite, so submissions are
/// serialized.
pub struct FileSlugRepository {
    path: PathBuf,
    slug_length: usize,
    mappings: RwLock<Mappings>,
}

impl FileSlugRepository {
    /// Creates a repository over already loaded mappings.
    pub fn new(path: impl Into<PathBuf>, slug_length: usize, mappings: Mappings) -> Self {
        Self {
            path: path.into(),
            slug_length,
            mappings: RwLock::new(mappings),
        }
    }

    /// Loads the storage file (missing means empty) and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read.
    pub async fn open(path: impl Into<PathBuf>, slug_length: usize) -> Result<Self, StoreError> {
        let path = path.into();
        let mappings = flat_file::load(&path).await?;
        Ok(Self::new(path, slug_length, mappings))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slug_length(&self) -> usize {
        self.slug_length
    }

    /// Clones the current table.
    pub async fn snapshot(&self) -> Mappings {
        self.mappings.read().await.clone()
    }
}

#[async_trait]
impl SlugRepository for FileSlugRepository {
    async fn find_by_slug(&self, slug: &str) -> Option<String> {
        self.mappings.read().await.lookup(slug).map(str::to_string)
    }

    async fn find_by_url(&self, url: &str) -> Option<String> {
        self.mappings
            .read()
            .await
            .reverse_lookup(url)
            .map(str::to_string)
    }

    async fn submit(&self, new_mapping: NewMapping) -> Result<Submission, StoreError> {
        let mut mappings = self.mappings.write().await;

        let submission = mappings.submit(new_mapping, self.slug_length)?;

        if submission.is_created()
            && let Err(e) = flat_file::persist(&self.path, &mappings).await
        {
            // The in-memory table already holds the mapping; disk catches up
            // on the next successful write.
            error!(
                path = %self.path.display(),
                error = %e,
                "Failed to write storage file"
            );
        }

        Ok(submission)
    }

    async fn count(&self) -> usize {
        self.mappings.read().await.len()
    }
}
