//! Data Transfer Objects for request deserialization.

pub mod submit;

pub use submit::SubmitForm;
