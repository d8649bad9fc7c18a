//! Mapping entity pairing a slug with its target URL.

/// A stored slug → URL pairing.
///
/// Once created a mapping is never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub slug: String,
    pub url: String,
}

impl Mapping {
    pub fn new(slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
        }
    }

    /// Builds the public short URL, e.g. `http://localhost/abc12`.
    pub fn short_url(&self, server_name: &str) -> String {
        format!("{}/{}", server_name.trim_end_matches('/'), self.slug)
    }
}

/// Drops `\n` and `\r` from a URL.
///
/// Records are newline-delimited on disk, so a URL is always held in this form.
pub fn strip_line_breaks(url: &str) -> String {
    url.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Input for creating a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub url: String,
    /// Slug asked for by the submitter; ignored when invalid or taken.
    pub requested_slug: Option<String>,
}

/// Outcome of a submission against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The URL was already shortened; nothing was written.
    Existing(Mapping),
    /// A new mapping was inserted and persisted.
    Created(Mapping),
}

impl Submission {
    pub fn mapping(&self) -> &Mapping {
        match self {
            Submission::Existing(mapping) | Submission::Created(mapping) => mapping,
        }
    }

    pub fn into_mapping(self) -> Mapping {
        match self {
            Submission::Existing(mapping) | Submission::Created(mapping) => mapping,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Submission::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url() {
        let mapping = Mapping::new("abc12", "http://example.com");
        assert_eq!(mapping.short_url("http://localhost"), "http://localhost/abc12");
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let mapping = Mapping::new("abc12", "http://example.com");
        assert_eq!(
            mapping.short_url("https://s.example.com/"),
            "https://s.example.com/abc12"
        );
    }

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("http://x\r\n.com\n"), "http://x.com");
        assert_eq!(strip_line_breaks("http://x.com/a b"), "http://x.com/a b");
    }

    #[test]
    fn test_submission_accessors() {
        let created = Submission::Created(Mapping::new("a", "http://a"));
        let existing = Submission::Existing(Mapping::new("b", "http://b"));

        assert!(created.is_created());
        assert!(!existing.is_created());
        assert_eq!(existing.mapping().slug, "b");
        assert_eq!(created.into_mapping().url, "http://a");
    }
}
