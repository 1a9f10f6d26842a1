//! Application layer: the `BlogApp` view-model and the views it composes.

pub mod blog_app;
pub mod form_kind;
pub mod view;

pub use blog_app::BlogApp;
pub use form_kind::FormKind;
pub use view::{PostCard, View};

#[cfg(test)]
mod mock_api;
