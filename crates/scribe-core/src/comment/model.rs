//! Comment record.

use serde::{Deserialize, Serialize};

use crate::post::PostId;

/// Server-assigned comment identifier.
pub type CommentId = i64;

/// A reply scoped to one post.
///
/// The association is by id equality only. Nothing checks that `post_id`
/// names a post the client has seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "postId", alias = "post_id")]
    pub post_id: PostId,
}

/// Comments belonging to `post_id`, in list order.
pub fn comments_for_post(
    comments: &[Comment],
    post_id: PostId,
) -> impl Iterator<Item = &Comment> {
    comments.iter().filter(move |comment| comment.post_id == post_id)
}
