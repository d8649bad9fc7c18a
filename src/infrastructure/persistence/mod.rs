//! Flat-file persistence.
//!
//! - [`flat_file`] - Line-based storage codec with atomic rewrite
//! - [`FileSlugRepository`] - Lock-guarded store implementing
//!   [`crate::domain::repositories::SlugRepository`]
//! - [`StorageLock`] - Single-writer guard on a storage file

pub mod file_slug_repository;
pub mod flat_file;
pub mod lock;

pub use file_slug_repository::FileSlugRepository;
pub use lock::StorageLock;
