//! View composition.
//!
//! A [`View`] is a borrowed snapshot of what the current state renders. It
//! holds no logic beyond choosing the anonymous or authenticated layout and
//! grouping comments under their posts; front-ends only have to draw it.

use scribe_core::comment::{Comment, NewComment, comments_for_post};
use scribe_core::form::Credentials;
use scribe_core::post::{NewPost, Post, PostId};

use crate::BlogApp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// No user: login and signup forms.
    Anonymous {
        login_form: &'a Credentials,
        signup_form: &'a Credentials,
    },
    /// Logged in: logout control, post form and the post list.
    Authenticated {
        user: &'a str,
        new_post: &'a NewPost,
        new_comment: &'a NewComment,
        posts: Vec<PostCard<'a>>,
    },
}

/// One post with the comments that reference it and its comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub comments: Vec<&'a Comment>,
    /// Hidden field of this post's comment form.
    pub comment_form_post_id: PostId,
}

impl<'a> View<'a> {
    pub(crate) fn compose(app: &'a BlogApp) -> Self {
        match app.user() {
            None => View::Anonymous {
                login_form: app.login_form(),
                signup_form: app.signup_form(),
            },
            Some(user) => View::Authenticated {
                user,
                new_post: app.new_post(),
                new_comment: app.new_comment(),
                posts: app
                    .posts()
                    .iter()
                    .map(|post| PostCard {
                        post,
                        comments: comments_for_post(app.comments(), post.id).collect(),
                        comment_form_post_id: post.id,
                    })
                    .collect(),
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, View::Authenticated { .. })
    }
}
