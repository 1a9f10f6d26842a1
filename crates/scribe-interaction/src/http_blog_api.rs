//! HttpBlogApi - REST client for the blog service.
//!
//! Every request goes to `<base_url><path>`. After login the bearer token is
//! kept as a default `Authorization` header and attached to all following
//! requests until it is cleared.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use scribe_core::comment::{Comment, CommentId, CommentUpdate, NewComment};
use scribe_core::config::{ClientConfig, LoginEncoding};
use scribe_core::form::Credentials;
use scribe_core::post::{NewPost, Post, PostId, PostUpdate};
use scribe_core::session::{AccessToken, EndpointInfo};
use scribe_core::{BlogApi, Result, ScribeError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;

/// `BlogApi` implementation backed by reqwest.
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
    login_encoding: LoginEncoding,
    timeout: Option<Duration>,
    /// Default `Authorization` header value, set after login.
    authorization: RwLock<Option<String>>,
}

/// Root listing served at `GET /`.
#[derive(Debug, Deserialize)]
struct EndpointListing {
    #[serde(default)]
    endpoints: Vec<EndpointInfo>,
}

/// Error body shape used by the server (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

impl HttpBlogApi {
    /// Creates a client for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_encoding: config.login_encoding,
            timeout: config.request_timeout(),
            authorization: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with the default headers applied.
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.url(path));

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        if let Some(authorization) = self.authorization.read().await.as_ref() {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }

        request
    }

    /// Sends the request and turns non-success statuses into errors.
    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            ScribeError::transport(format!("{} failed: {}", context, e))
        })?;

        let status = response.status();
        tracing::debug!("[HttpBlogApi] {} -> {}", context, status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ScribeError::http(status.as_u16(), error_message(&error_text)));
        }

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let context = format!("GET {}", path);
        let request = self.request(Method::GET, path).await;
        let response = self.send(request, &context).await?;
        decode(response, &context).await
    }
}

/// Prefers the server's `detail` message over the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorDetail { detail }) => detail.to_string(),
        Err(_) => body.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ScribeError::transport(format!("{} body read failed: {}", context, e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ScribeError::json(format!("{}: {}", context, e)))
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn endpoints(&self) -> Result<Vec<EndpointInfo>> {
        let listing: EndpointListing = self.fetch_json("/").await?;
        Ok(listing.endpoints)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.fetch_json("/posts").await
    }

    async fn get_post(&self, id: PostId) -> Result<Post> {
        self.fetch_json(&format!("/posts/{}", id)).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<()> {
        let request = self.request(Method::POST, "/posts").await.json(post);
        self.send(request, "POST /posts").await?;
        Ok(())
    }

    async fn update_post(&self, id: PostId, update: &PostUpdate) -> Result<()> {
        let path = format!("/posts/{}", id);
        let request = self.request(Method::PUT, &path).await.json(update);
        self.send(request, &format!("PUT {}", path)).await?;
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<()> {
        let path = format!("/posts/{}", id);
        let request = self.request(Method::DELETE, &path).await;
        self.send(request, &format!("DELETE {}", path)).await?;
        Ok(())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        self.fetch_json("/comments").await
    }

    async fn get_comment(&self, id: CommentId) -> Result<Comment> {
        self.fetch_json(&format!("/comments/{}", id)).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<()> {
        let request = self.request(Method::POST, "/comments").await.json(comment);
        self.send(request, "POST /comments").await?;
        Ok(())
    }

    async fn update_comment(&self, id: CommentId, update: &CommentUpdate) -> Result<()> {
        let path = format!("/comments/{}", id);
        let request = self.request(Method::PUT, &path).await.json(update);
        self.send(request, &format!("PUT {}", path)).await?;
        Ok(())
    }

    async fn delete_comment(&self, id: CommentId) -> Result<()> {
        let path = format!("/comments/{}", id);
        let request = self.request(Method::DELETE, &path).await;
        self.send(request, &format!("DELETE {}", path)).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let request = self.request(Method::POST, "/login").await;
        let request = match self.login_encoding {
            LoginEncoding::Json => request.json(credentials),
            LoginEncoding::Form => request.form(&[
                ("username", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
            ]),
        };
        let response = self.send(request, "POST /login").await?;
        decode(response, "POST /login").await
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        let request = self.request(Method::POST, "/register").await.json(credentials);
        self.send(request, "POST /register").await?;
        Ok(())
    }

    async fn set_bearer_token(&self, token: Option<&AccessToken>) {
        let mut authorization = self.authorization.write().await;
        *authorization = token.map(AccessToken::authorization_value);
        tracing::debug!(
            "[HttpBlogApi] Authorization header {}",
            if authorization.is_some() { "set" } else { "cleared" }
        );
    }
}
