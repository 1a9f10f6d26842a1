//! Post payloads sent to the API.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScribeError};
use crate::form::FormBuffer;

/// The new-post form buffer, posted as-is to `POST /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl FormBuffer for NewPost {
    const NAME: &'static str = "post";

    fn field_names() -> &'static [&'static str] {
        &["title", "content", "author"]
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "title" => self.title = value.to_string(),
            "content" => self.content = value.to_string(),
            "author" => self.author = value.to_string(),
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
        self.title.is_empty() && self.content.is_empty() && self.author.is_empty()
    }
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
}
