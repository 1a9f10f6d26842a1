//! Comment domain module.

mod draft;
mod model;

pub use draft::{CommentUpdate, NewComment};
pub use model::{Comment, CommentId, comments_for_post};
