//! HTTP request handlers.

pub mod redirect;
pub mod submit;

pub use redirect::redirect_handler;
pub use submit::submit_handler;
