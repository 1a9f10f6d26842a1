//! Data loading: full-list fetches and single-record lookups.

use scribe_core::comment::{Comment, CommentId};
use scribe_core::post::{Post, PostId};
use scribe_core::session::EndpointInfo;

use super::BlogApp;

impl BlogApp {
    /// Initial mount: fetches posts, then comments.
    pub async fn load(&mut self) {
        self.fetch_posts().await;
        self.fetch_comments().await;
    }

    /// Replaces the post list with the server's. Keeps the old list on failure.
    pub async fn fetch_posts(&mut self) {
        match self.api.list_posts().await {
            Ok(posts) => {
                tracing::debug!("[Loader] Fetched {} posts", posts.len());
                self.posts = posts;
            }
            Err(e) => tracing::error!("[Loader] Error fetching posts: {}", e),
        }
    }

    /// Replaces the comment list with the server's. Keeps the old list on failure.
    pub async fn fetch_comments(&mut self) {
        match self.api.list_comments().await {
            Ok(comments) => {
                tracing::debug!("[Loader] Fetched {} comments", comments.len());
                self.comments = comments;
            }
            Err(e) => tracing::error!("[Loader] Error fetching comments: {}", e),
        }
    }

    /// Looks up a single post without touching the list.
    pub async fn fetch_post(&self, id: PostId) -> Option<Post> {
        self.api
            .get_post(id)
            .await
            .map_err(|e| tracing::error!("[Loader] Error fetching post {}: {}", id, e))
            .ok()
    }

    /// Looks up a single comment without touching the list.
    pub async fn fetch_comment(&self, id: CommentId) -> Option<Comment> {
        self.api
            .get_comment(id)
            .await
            .map_err(|e| tracing::error!("[Loader] Error fetching comment {}: {}", id, e))
            .ok()
    }

    /// Endpoints the server advertises at its root. Empty on failure.
    pub async fn describe_endpoints(&self) -> Vec<EndpointInfo> {
        match self.api.endpoints().await {
            Ok(endpoints) => endpoints,
            Err(e) => {
                tracing::error!("[Loader] Error fetching endpoint listing: {}", e);
                Vec::new()
            }
        }
    }
}
