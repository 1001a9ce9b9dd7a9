//! Character set validation for the message text
//!
//! The `--encoding` flag names the character set the message is posted in.
//! Messages are UTF-8 in memory; when an explicit encoding is selected the
//! text must be representable in it, otherwise the post is rejected before
//! any network call.

use encoding_rs::Encoding;

use crate::error::{Result, TweetError};

/// Check that `message` can be encoded with the character set named by
/// `label`.
///
/// With no label the message is accepted as-is. An unknown label, or a
/// message containing characters the encoding cannot represent, is an
/// `Encoding` error.
pub fn check_encodable(message: &str, label: Option<&str>) -> Result<()> {
    let Some(label) = label else {
        return Ok(());
    };

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| TweetError::Encoding(label.to_string()))?;

    let (_, _, had_errors) = encoding.encode(message);
    if had_errors {
        return Err(TweetError::Encoding(label.to_string()));
    }

    Ok(())
}
