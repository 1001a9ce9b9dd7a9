//! Mock posting client for testing
//!
//! Available in all builds so the binary's integration tests can drive the
//! full argument/validation/exit-code flow without credentials or network
//! access. Selected by the binary through the `TWEET_CLIENT` environment
//! variable.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::{PostedStatus, StatusClient};
use crate::encoding;
use crate::error::{Result, TweetError};

/// Environment variable naming the mock author, read by `from_env`.
pub const MOCK_AUTHOR_ENV: &str = "TWEET_MOCK_AUTHOR";

const DEFAULT_AUTHOR: &str = "Mock User";

#[derive(Debug, Clone)]
enum Behavior {
    /// Echo the message back under the given author name
    Success { author: String },

    /// Fail every post with a service error
    ServiceError(String),
}

/// Mock client with configurable outcome.
pub struct MockClient {
    behavior: Behavior,
    input_encoding: Option<String>,
    posted: Arc<Mutex<Vec<(String, Option<PathBuf>)>>>,
}

impl MockClient {
    /// A client whose posts succeed, echoing the message text.
    pub fn success(author: &str, input_encoding: Option<String>) -> Self {
        Self {
            behavior: Behavior::Success {
                author: author.to_string(),
            },
            input_encoding,
            posted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A client whose posts fail with a service error.
    pub fn service_failure(detail: &str, input_encoding: Option<String>) -> Self {
        Self {
            behavior: Behavior::ServiceError(detail.to_string()),
            input_encoding,
            posted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A successful client configured from the environment, using
    /// `TWEET_MOCK_AUTHOR` for the author name when set.
    pub fn from_env(input_encoding: Option<String>) -> Self {
        let author = std::env::var(MOCK_AUTHOR_ENV).unwrap_or_else(|_| DEFAULT_AUTHOR.to_string());
        Self::success(&author, input_encoding)
    }

    /// Every message/media pair that reached this client.
    pub fn posted(&self) -> Vec<(String, Option<PathBuf>)> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusClient for MockClient {
    async fn post_update(&self, message: &str, media: Option<&Path>) -> Result<PostedStatus> {
        // Same pre-flight check as the real client
        encoding::check_encodable(message, self.input_encoding.as_deref())?;

        self.posted
            .lock()
            .unwrap()
            .push((message.to_string(), media.map(Path::to_path_buf)));

        match &self.behavior {
            Behavior::Success { author } => Ok(PostedStatus {
                author: author.clone(),
                text: message.to_string(),
            }),
            Behavior::ServiceError(detail) => Err(TweetError::Service(detail.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_echoes_message() {
        let client = MockClient::success("Test Account", None);

        let status = client.post_update("Hello world", None).await.unwrap();
        assert_eq!(status.author, "Test Account");
        assert_eq!(status.text, "Hello world");

        let posted = client.posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "Hello world");
        assert_eq!(posted[0].1, None);
    }

    #[tokio::test]
    async fn test_media_path_is_recorded() {
        let client = MockClient::success("Test Account", None);

        client
            .post_update("with media", Some(Path::new("pic.png")))
            .await
            .unwrap();

        let posted = client.posted();
        assert_eq!(posted[0].1.as_deref(), Some(Path::new("pic.png")));
    }

    #[tokio::test]
    async fn test_service_failure() {
        let client = MockClient::service_failure("duplicate status", None);

        let result = client.post_update("Hello", None).await;
        match result {
            Err(TweetError::Service(detail)) => assert_eq!(detail, "duplicate status"),
            other => panic!("expected service error, got {:?}", other.map(|_| ())),
        }

        // The attempt is still recorded
        assert_eq!(client.posted().len(), 1);
    }

    #[tokio::test]
    async fn test_encoding_check_applies_to_mock() {
        let client = MockClient::success("Test Account", Some("windows-1252".to_string()));

        let result = client.post_update("こんにちは", None).await;
        assert!(matches!(result, Err(TweetError::Encoding(_))));

        // Rejected before the post was recorded
        assert!(client.posted().is_empty());
    }
}
