//! Error types for the tweet tool

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TweetError>;

#[derive(Error, Debug)]
pub enum TweetError {
    #[error("Missing or invalid file tweetrc.")]
    ConfigMissing,

    #[error("No message passed.")]
    NoMessage,

    #[error("Missing credentials.")]
    MissingCredentials,

    /// The message cannot be represented in the selected character set.
    /// The inner value is the encoding label that was attempted.
    #[error(
        "Your message could not be encoded as {0:?}. \
         Try explicitly specifying the encoding with the --encoding flag."
    )]
    Encoding(String),

    /// Any failure reported by the remote service. The detail string is
    /// surfaced only through debug logging; the user-facing message is
    /// deliberately generic.
    #[error("Twitter error.")]
    Service(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TweetError {
    /// Returns the process exit code for this error.
    ///
    /// Every hard failure shares a single non-zero status; only the help
    /// path exits 0, and that never reaches this type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TweetError::ConfigMissing => 2,
            TweetError::NoMessage => 2,
            TweetError::MissingCredentials => 2,
            TweetError::Encoding(_) => 2,
            TweetError::Service(_) => 2,
            TweetError::Io(_) => 2,
        }
    }

    /// Whether the binary should re-print usage after the error message.
    ///
    /// Argument, configuration, and credential problems get usage text;
    /// encoding and service failures get their own guidance instead.
    pub fn prints_usage(&self) -> bool {
        matches!(
            self,
            TweetError::ConfigMissing | TweetError::NoMessage | TweetError::MissingCredentials
        )
    }
}
