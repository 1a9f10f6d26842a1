//! The blog view-model.
//!
//! `BlogApp` owns every piece of client state: the post and comment lists,
//! the session and the four form buffers. Handlers mutate it through
//! `&mut self` and never return network errors; failures are written to the
//! diagnostic log and the previous state stays in place.
//!
//! - `loader`: initial load and list/detail fetches
//! - `session`: login, signup and logout
//! - `authoring`: create/edit/delete of posts and comments

mod authoring;
mod loader;
mod session;

use std::sync::Arc;

use scribe_core::BlogApi;
use scribe_core::comment::{Comment, NewComment};
use scribe_core::form::{Credentials, FormBuffer};
use scribe_core::post::{NewPost, Post};
use scribe_core::session::Session;

use crate::form_kind::FormKind;
use crate::view::View;

pub struct BlogApp {
    api: Arc<dyn BlogApi>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    session: Option<Session>,
    login_form: Credentials,
    signup_form: Credentials,
    new_post: NewPost,
    new_comment: NewComment,
}

impl BlogApp {
    /// Creates an app with empty lists and no session. Call [`BlogApp::load`]
    /// to populate it.
    pub fn new(api: Arc<dyn BlogApi>) -> Self {
        Self {
            api,
            posts: Vec::new(),
            comments: Vec::new(),
            session: None,
            login_form: Credentials::default(),
            signup_form: Credentials::default(),
            new_post: NewPost::default(),
            new_comment: NewComment::default(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Email of the logged-in user.
    pub fn user(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn login_form(&self) -> &Credentials {
        &self.login_form
    }

    pub fn signup_form(&self) -> &Credentials {
        &self.signup_form
    }

    pub fn new_post(&self) -> &NewPost {
        &self.new_post
    }

    pub fn new_comment(&self) -> &NewComment {
        &self.new_comment
    }

    /// Applies an input change to one of the form buffers.
    ///
    /// Only rejects names the form does not bind or values that do not parse;
    /// it never talks to the server.
    pub fn update_form(
        &mut self,
        form: FormKind,
        field: &str,
        value: &str,
    ) -> scribe_core::Result<()> {
        match form {
            FormKind::Login => self.login_form.set_field(field, value),
            FormKind::Signup => self.signup_form.set_field(field, value),
            FormKind::NewPost => self.new_post.set_field(field, value),
            FormKind::NewComment => self.new_comment.set_field(field, value),
        }
    }

    /// Snapshot of what the current state renders.
    pub fn view(&self) -> View<'_> {
        View::compose(self)
    }
}
