//! In-memory `BlogApi` used by the application tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use scribe_core::comment::{Comment, CommentId, CommentUpdate, NewComment};
use scribe_core::form::Credentials;
use scribe_core::post::{NewPost, Post, PostId, PostUpdate};
use scribe_core::session::{AccessToken, EndpointInfo};
use scribe_core::{BlogApi, Result, ScribeError};

pub fn post(id: PostId, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: format!("{title} content"),
        author: "seed".to_string(),
    }
}

#[derive(Default)]
struct MockState {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    users: Vec<Credentials>,
    next_id: i64,
    bearer: Option<String>,
    failing: HashSet<&'static str>,
    accept_duplicate_signups: bool,
    calls: Vec<String>,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MockBlogApi {
    state: Mutex<MockState>,
}

impl MockBlogApi {
    pub fn seed_post(&self, post: Post) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(post.id);
        state.posts.push(post);
    }

    pub fn seed_comment(&self, post_id: PostId, content: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.comments.push(Comment {
            id,
            content: content.to_string(),
            author: "seed".to_string(),
            post_id,
        });
    }

    pub fn add_user(&self, email: &str, password: &str) {
        self.state
            .lock()
            .unwrap()
            .users
            .push(Credentials::new(email, password));
    }

    pub fn has_user(&self, email: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .any(|u| u.email == email)
    }

    pub fn accept_duplicate_signups(&self) {
        self.state.lock().unwrap().accept_duplicate_signups = true;
    }

    /// Makes every later call to `operation` fail with a transport error.
    pub fn fail(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub fn bearer(&self) -> Option<String> {
        self.state.lock().unwrap().bearer.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Records the call and returns the state, or the injected failure.
    fn enter(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(operation.to_string());
        if state.failing.contains(operation) {
            return Err(ScribeError::transport(format!("{operation}: connection refused")));
        }
        Ok(state)
    }
}

#[async_trait]
impl BlogApi for MockBlogApi {
    async fn endpoints(&self) -> Result<Vec<EndpointInfo>> {
        self.enter("endpoints")?;
        Ok(["/", "/register", "/login"]
            .into_iter()
            .map(|url| EndpointInfo {
                url: url.to_string(),
                description: String::new(),
            })
            .collect())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.enter("list_posts")?.posts.clone())
    }

    async fn get_post(&self, id: PostId) -> Result<Post> {
        self.enter("get_post")?
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ScribeError::http(404, "Post not found"))
    }

    async fn create_post(&self, post: &NewPost) -> Result<()> {
        let mut state = self.enter("create_post")?;
        let id = state.next_id();
        state.posts.push(Post {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
        });
        Ok(())
    }

    async fn update_post(&self, id: PostId, update: &PostUpdate) -> Result<()> {
        let mut state = self.enter("update_post")?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ScribeError::http(404, "Post not found"))?;
        post.title = update.title.clone();
        post.content = update.content.clone();
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<()> {
        let mut state = self.enter("delete_post")?;
        if !state.posts.iter().any(|p| p.id == id) {
            return Err(ScribeError::http(404, "Post not found"));
        }
        state.posts.retain(|p| p.id != id);
        state.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.enter("list_comments")?.comments.clone())
    }

    async fn get_comment(&self, id: CommentId) -> Result<Comment> {
        self.enter("get_comment")?
            .comments
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ScribeError::http(404, "Comment not found"))
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<()> {
        let mut state = self.enter("create_comment")?;
        let post_id = comment
            .post_id
            .ok_or_else(|| ScribeError::http(422, "postId is required"))?;
        let id = state.next_id();
        state.comments.push(Comment {
            id,
            content: comment.content.clone(),
            author: comment.author.clone(),
            post_id,
        });
        Ok(())
    }

    async fn update_comment(&self, id: CommentId, update: &CommentUpdate) -> Result<()> {
        let mut state = self.enter("update_comment")?;
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ScribeError::http(404, "Comment not found"))?;
        comment.content = update.content.clone();
        Ok(())
    }

    async fn delete_comment(&self, id: CommentId) -> Result<()> {
        let mut state = self.enter("delete_comment")?;
        if !state.comments.iter().any(|c| c.id == id) {
            return Err(ScribeError::http(404, "Comment not found"));
        }
        state.comments.retain(|c| c.id != id);
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let state = self.enter("login")?;
        if state.users.iter().any(|u| u == credentials) {
            Ok(AccessToken::bearer(format!("token-for-{}", credentials.email)))
        } else {
            Err(ScribeError::http(401, "Invalid username or password"))
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        let mut state = self.enter("register")?;
        if state.users.iter().any(|u| u.email == credentials.email) {
            if state.accept_duplicate_signups {
                return Ok(());
            }
            return Err(ScribeError::http(400, "Email already registered"));
        }
        state.users.push(credentials.clone());
        Ok(())
    }

    async fn set_bearer_token(&self, token: Option<&AccessToken>) {
        self.state.lock().unwrap().bearer = token.map(AccessToken::authorization_value);
    }
}
