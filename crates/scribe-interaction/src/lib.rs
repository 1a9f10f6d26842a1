//! Transport implementations of [`scribe_core::BlogApi`].

pub mod http_blog_api;

pub use http_blog_api::HttpBlogApi;

#[cfg(test)]
mod test_server;
