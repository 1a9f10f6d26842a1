//! Comment payloads sent to the API.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScribeError};
use crate::form::FormBuffer;
use crate::post::PostId;

/// The new-comment form buffer, posted to `POST /comments`.
///
/// `post_id` is the hidden field of the per-post comment form; it stays
/// `None` until the form is submitted against a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub author: String,
    #[serde(rename = "postId")]
    pub post_id: Option<PostId>,
}

impl NewComment {
    /// Binds the buffer to the post whose form is being submitted.
    pub fn scoped_to(&mut self, post_id: PostId) {
        self.post_id = Some(post_id);
    }
}

impl FormBuffer for NewComment {
    const NAME: &'static str = "comment";

    fn field_names() -> &'static [&'static str] {
        &["content", "author", "postId"]
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "content" => self.content = value.to_string(),
            "author" => self.author = value.to_string(),
            "postId" => {
                let trimmed = value.trim();
                self.post_id = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.parse().map_err(|e| ScribeError::InvalidValue {
                        field: name.to_string(),
                        message: format!("{e}"),
                    })?)
                };
            }
            _ => {
                return Err(ScribeError::UnknownField {
                    form: Self::NAME,
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn is_blank(&self) -> bool {
        self.content.is_empty() && self.author.is_empty() && self.post_id.is_none()
    }
}

/// Body of `PUT /comments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub content: String,
}
