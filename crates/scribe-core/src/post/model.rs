//! Post record.

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier.
pub type PostId = i64;

/// A blog entry as listed by `GET /posts`.
///
/// Posts are never mutated client-side; the list is replaced wholesale on
/// every re-fetch and keeps the server's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Display name of the author. Empty when the server does not echo it.
    #[serde(default)]
    pub author: String,
}
