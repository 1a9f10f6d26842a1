//! Domain layer of the Scribe blog client.
//!
//! Holds the records exchanged with the blog API, the form buffers the
//! front-end binds to inputs, the [`BlogApi`] seam and the shared error type.

pub mod api;
pub mod comment;
pub mod config;
pub mod error;
pub mod form;
pub mod post;
pub mod session;

pub use api::BlogApi;
pub use error::{Result, ScribeError};
