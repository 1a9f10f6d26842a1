use std::fmt;
use std::str::FromStr;

use scribe_core::ScribeError;
use scribe_core::comment::NewComment;
use scribe_core::form::{Credentials, FormBuffer};
use scribe_core::post::NewPost;

/// Identifies one of the four form buffers held by [`crate::BlogApp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    NewPost,
    NewComment,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Login,
        FormKind::Signup,
        FormKind::NewPost,
        FormKind::NewComment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
            FormKind::NewPost => "post",
            FormKind::NewComment => "comment",
        }
    }

    /// Input names of the form's buffer, in display order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            FormKind::Login | FormKind::Signup => Credentials::field_names(),
            FormKind::NewPost => NewPost::field_names(),
            FormKind::NewComment => NewComment::field_names(),
        }
    }

    /// Whether the form is shown to anonymous users (as opposed to logged-in ones).
    pub fn is_anonymous_form(&self) -> bool {
        matches!(self, FormKind::Login | FormKind::Signup)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScribeError::InvalidValue {
                field: "form".to_string(),
                message: format!("unknown form '{}' (expected login, signup, post or comment)", s),
            })
    }
}
