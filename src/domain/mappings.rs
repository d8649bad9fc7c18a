//! In-memory bidirectional slug table.

use std::collections::HashMap;

use crate::domain::entities::{Mapping, NewMapping, Submission, strip_line_breaks};
use crate::domain::slug::resolve_slug;
use crate::error::StoreError;

/// Forward (slug → URL) and reverse (URL → slug) maps kept in lockstep.
///
/// Every forward entry has exactly one reverse entry and vice versa. The
/// reverse side lets a resubmitted URL reuse its existing slug.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mappings {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Target URL for `slug`.
    pub fn lookup(&self, slug: &str) -> Option<&str> {
        self.forward.get(slug).map(String::as_str)
    }

    /// Slug already assigned to `url`.
    pub fn reverse_lookup(&self, url: &str) -> Option<&str> {
        self.reverse.get(url).map(String::as_str)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.forward.contains_key(slug)
    }

    /// Inserts a new pairing into both maps.
    ///
    /// The caller guarantees `slug` is free and `url` has no slug yet.
    pub fn put(&mut self, slug: String, url: String) {
        debug_assert!(!self.forward.contains_key(&slug), "slug {slug} already taken");
        debug_assert!(!self.reverse.contains_key(&url), "url {url} already shortened");

        self.reverse.insert(url.clone(), slug.clone());
        self.forward.insert(slug, url);
    }

    /// Inserts a pairing read back from storage.
    ///
    /// Later records win. Any stale pairing sharing the slug or the URL is
    /// dropped from both sides so the maps stay a bijection.
    pub fn restore(&mut self, slug: String, url: String) {
        if let Some(old_url) = self.forward.remove(&slug) {
            self.reverse.remove(&old_url);
        }
        if let Some(old_slug) = self.reverse.remove(&url) {
            self.forward.remove(&old_slug);
        }

        self.put(slug, url);
    }

    /// Resolves a submission: reuses the URL's existing slug, or allocates a
    /// slug and inserts the new pairing.
    ///
    /// Line breaks are dropped from the URL first, so the table holds the same
    /// key the storage file will. The store is untouched when allocation fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugSpaceExhausted`] when no free slug of
    /// `slug_length` could be found.
    pub fn submit(
        &mut self,
        new_mapping: NewMapping,
        slug_length: usize,
    ) -> Result<Submission, StoreError> {
        let url = strip_line_breaks(&new_mapping.url);

        if let Some(slug) = self.reverse_lookup(&url) {
            return Ok(Submission::Existing(Mapping::new(slug, url)));
        }

        let slug = resolve_slug(
            &mut rand::rng(),
            new_mapping.requested_slug.as_deref(),
            slug_length,
            |candidate| self.contains_slug(candidate),
        )?;

        let mapping = Mapping::new(slug, url);
        self.put(mapping.slug.clone(), mapping.url.clone());

        Ok(Submission::Created(mapping))
    }

    /// Iterates over `(slug, url)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(s, u)| (s.as_str(), u.as_str()))
    }

    /// Returns all mappings sorted by slug.
    pub fn sorted(&self) -> Vec<Mapping> {
        let mut all: Vec<Mapping> = self.iter().map(|(s, u)| Mapping::new(s, u)).collect();
        all.sort_by(|a, b| a.slug.cmp(&b.slug));
        all
    }

    /// Checks that both sides mirror each other.
    pub fn is_consistent(&self) -> bool {
        self.forward.len() == self.reverse.len()
            && self
                .forward
                .iter()
                .all(|(slug, url)| self.reverse.get(url) == Some(slug))
    }
}
