//! Post domain module.
//!
//! - `model`: the `Post` record as returned by the API
//! - `draft`: request payloads for creating and editing posts

mod draft;
mod model;

pub use draft::{NewPost, PostUpdate};
pub use model::{Post, PostId};
