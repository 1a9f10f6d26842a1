//! The remote blog API as seen by the client.

use async_trait::async_trait;

use crate::comment::{Comment, CommentId, CommentUpdate, NewComment};
use crate::error::Result;
use crate::form::Credentials;
use crate::post::{NewPost, Post, PostId, PostUpdate};
use crate::session::{AccessToken, EndpointInfo};

/// An abstract client for the blog service.
///
/// This decouples the view-model from the transport so it can be driven by an
/// HTTP implementation in production and an in-memory fake in tests.
///
/// Create, update and delete calls ignore the response body; callers re-fetch
/// the affected list instead.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /` - endpoints advertised by the server.
    async fn endpoints(&self) -> Result<Vec<EndpointInfo>>;

    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// `GET /posts/{id}`
    async fn get_post(&self, id: PostId) -> Result<Post>;

    /// `POST /posts`
    async fn create_post(&self, post: &NewPost) -> Result<()>;

    /// `PUT /posts/{id}`
    async fn update_post(&self, id: PostId, update: &PostUpdate) -> Result<()>;

    /// `DELETE /posts/{id}`
    async fn delete_post(&self, id: PostId) -> Result<()>;

    /// `GET /comments`
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    /// `GET /comments/{id}`
    async fn get_comment(&self, id: CommentId) -> Result<Comment>;

    /// `POST /comments`
    async fn create_comment(&self, comment: &NewComment) -> Result<()>;

    /// `PUT /comments/{id}`
    async fn update_comment(&self, id: CommentId, update: &CommentUpdate) -> Result<()>;

    /// `DELETE /comments/{id}`
    async fn delete_comment(&self, id: CommentId) -> Result<()>;

    /// `POST /login` - exchanges credentials for an access token.
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;

    /// `POST /register` - the response body is ignored.
    async fn register(&self, credentials: &Credentials) -> Result<()>;

    /// Sets or clears the default `Authorization` header sent with every
    /// subsequent request.
    async fn set_bearer_token(&self, token: Option<&AccessToken>);
}
