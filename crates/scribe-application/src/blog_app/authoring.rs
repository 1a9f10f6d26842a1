//! Post and comment authoring.
//!
//! Every successful write is followed by a full re-fetch of the affected list;
//! nothing is inserted locally. Failed writes leave the buffers as they were.

use scribe_core::comment::{CommentId, CommentUpdate};
use scribe_core::form::FormBuffer;
use scribe_core::post::{PostId, PostUpdate};

use super::BlogApp;

impl BlogApp {
    /// Submits the new-post form, clears it and re-fetches posts.
    pub async fn submit_new_post(&mut self) {
        match self.api.create_post(&self.new_post).await {
            Ok(()) => {
                tracing::info!("[Authoring] Created post '{}'", self.new_post.title);
                self.new_post.clear();
                self.fetch_posts().await;
            }
            Err(e) => tracing::error!("[Authoring] Error creating post: {}", e),
        }
    }

    /// Submits the comment form of post `post_id`.
    ///
    /// The post id is the form's hidden field, so it is written into the
    /// buffer right before sending.
    pub async fn submit_new_comment(&mut self, post_id: PostId) {
        self.new_comment.scoped_to(post_id);
        match self.api.create_comment(&self.new_comment).await {
            Ok(()) => {
                tracing::info!("[Authoring] Created comment on post {}", post_id);
                self.new_comment.clear();
                self.fetch_comments().await;
            }
            Err(e) => tracing::error!("[Authoring] Error creating comment: {}", e),
        }
    }

    pub async fn edit_post(&mut self, id: PostId, update: PostUpdate) {
        match self.api.update_post(id, &update).await {
            Ok(()) => {
                tracing::info!("[Authoring] Updated post {}", id);
                self.fetch_posts().await;
            }
            Err(e) => tracing::error!("[Authoring] Error updating post {}: {}", id, e),
        }
    }

    /// Deletes a post. Comments are re-fetched too since the server may drop
    /// the post's replies with it.
    pub async fn remove_post(&mut self, id: PostId) {
        match self.api.delete_post(id).await {
            Ok(()) => {
                tracing::info!("[Authoring] Deleted post {}", id);
                self.fetch_posts().await;
                self.fetch_comments().await;
            }
            Err(e) => tracing::error!("[Authoring] Error deleting post {}: {}", id, e),
        }
    }

    pub async fn edit_comment(&mut self, id: CommentId, update: CommentUpdate) {
        match self.api.update_comment(id, &update).await {
            Ok(()) => {
                tracing::info!("[Authoring] Updated comment {}", id);
                self.fetch_comments().await;
            }
            Err(e) => tracing::error!("[Authoring] Error updating comment {}: {}", id, e),
        }
    }

    pub async fn remove_comment(&mut self, id: CommentId) {
        match self.api.delete_comment(id).await {
            Ok(()) => {
                tracing::info!("[Authoring] Deleted comment {}", id);
                self.fetch_comments().await;
            }
            Err(e) => tracing::error!("[Authoring] Error deleting comment {}: {}", id, e),
        }
    }
}
