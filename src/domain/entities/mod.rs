//! Core business entities.
//!
//! - [`Mapping`] - a slug paired with its target URL
//! - [`NewMapping`] - input for a submission
//! - [`Submission`] - whether a submission reused or created a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping, Submission, strip_line_breaks};
