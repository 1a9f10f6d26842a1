//! Session domain module.
//!
//! The session is the client's transient notion of who is logged in. It only
//! lives in memory; nothing here is persisted.

mod model;

pub use model::{AccessToken, EndpointInfo, Session};
