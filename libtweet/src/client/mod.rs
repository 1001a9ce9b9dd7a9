//! Posting client boundary
//!
//! The orchestrator talks to the remote service through the `StatusClient`
//! trait. The real implementation is `TwitterClient`; `MockClient` is
//! available in all builds so the binary can be exercised end to end in
//! integration tests without credentials or network access.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub mod mock;
pub mod twitter;

pub use mock::MockClient;
pub use twitter::TwitterClient;

/// The outcome of a successful post: who posted and what the service
/// recorded as the status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedStatus {
    /// Display name of the posting account
    pub author: String,

    /// The text actually posted
    pub text: String,
}

/// A client capable of publishing one status update.
///
/// # Errors
///
/// Implementations return `TweetError::Encoding` when the message cannot be
/// represented in the selected character set, and `TweetError::Service` for
/// every failure reported by the remote service.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Post `message`, optionally attaching the media file at `media`.
    async fn post_update(&self, message: &str, media: Option<&Path>) -> Result<PostedStatus>;
}
