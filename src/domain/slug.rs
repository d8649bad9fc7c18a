//! Slug generation and validation.
//!
//! Slugs are drawn from the 62-character alphabet `a-z A-Z 0-9`. Random slugs
//! have the configured length; explicitly requested slugs only need to be
//! non-empty, use the alphabet, and be free.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::error::StoreError;

/// Every character a slug may contain.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Upper bound on random draws before allocation gives up.
pub const MAX_ATTEMPTS: usize = 100_000;

/// Returns `true` if `c` belongs to the slug alphabet.
pub fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` when `slug` is non-empty and built only from the alphabet.
///
/// Length is deliberately not checked: stored slugs may predate a change of
/// the configured length, and callers may request shorter or longer slugs.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(is_slug_char)
}

/// Draws one slug of `length` characters, each independently and uniformly
/// from the alphabet.
pub fn generate_slug<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Draws slugs until one is not taken.
///
/// # Errors
///
/// Returns [`StoreError::SlugSpaceExhausted`] after [`MAX_ATTEMPTS`] taken
/// candidates.
pub fn generate_unique_slug<R, F>(
    rng: &mut R,
    length: usize,
    is_taken: F,
) -> Result<String, StoreError>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate = generate_slug(rng, length);
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }

    Err(StoreError::SlugSpaceExhausted {
        attempts: MAX_ATTEMPTS,
        length,
    })
}

/// Picks the slug for a new mapping.
///
/// A requested slug is used verbatim when it is valid and free. Otherwise a
/// random one is generated.
///
/// NOTE: the fallback is silent. A caller whose requested slug was malformed
/// or already taken only notices by comparing it with the returned slug.
pub fn resolve_slug<R, F>(
    rng: &mut R,
    requested: Option<&str>,
    length: usize,
    is_taken: F,
) -> Result<String, StoreError>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    if let Some(slug) = requested
        && is_valid_slug(slug)
        && !is_taken(slug)
    {
        return Ok(slug.to_string());
    }

    generate_unique_slug(rng, length, is_taken)
}
