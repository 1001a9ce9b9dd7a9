//! libtweet - post a single status update to Twitter from the command line
//!
//! This library provides the credential loading, message encoding checks,
//! and the posting client used by the `tweet` binary. Each invocation
//! performs exactly one authenticated API call.

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;

// Re-export commonly used types
pub use client::{MockClient, PostedStatus, StatusClient, TwitterClient};
pub use config::{Credentials, TweetRc};
pub use error::{Result, TweetError};
