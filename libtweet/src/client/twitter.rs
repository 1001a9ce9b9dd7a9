//! Twitter v1.1 posting client
//!
//! Performs the one authenticated call of a run: an OAuth 1.0a signed POST
//! to `statuses/update.json`, preceded by a media upload when an attachment
//! is present. Every remote failure collapses into the generic `Service`
//! error; the response detail is only visible at debug log level.

use std::path::Path;

use async_trait::async_trait;
use oauth1_request as oauth;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::client::{PostedStatus, StatusClient};
use crate::config::Credentials;
use crate::encoding;
use crate::error::{Result, TweetError};

const UPDATE_URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
const MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";

#[derive(oauth::Request)]
struct StatusUpdate<'a> {
    status: &'a str,
}

#[derive(oauth::Request)]
struct StatusUpdateWithMedia<'a> {
    media_ids: &'a str,
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    text: String,
    user: UserResponse,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct MediaUploadResponse {
    media_id_string: String,
}

/// Client for posting a single status update to Twitter.
pub struct TwitterClient {
    http: reqwest::Client,
    token: oauth::Token<String, String>,
    input_encoding: Option<String>,
}

impl TwitterClient {
    /// Create a client from the four credential strings and an optional
    /// input encoding label.
    pub fn new(credentials: Credentials, input_encoding: Option<String>) -> Self {
        let Credentials {
            consumer_key,
            consumer_secret,
            access_key,
            access_secret,
        } = credentials;

        Self {
            http: reqwest::Client::new(),
            token: oauth::Token::from_parts(
                consumer_key,
                consumer_secret,
                access_key,
                access_secret,
            ),
            input_encoding,
        }
    }

    async fn upload_media(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TweetError::Service(format!("failed to read media file: {}", e)))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("media", part);

        // Multipart bodies are excluded from the signature base string, so
        // only the oauth parameters themselves are signed here.
        let authorization = oauth::post(MEDIA_UPLOAD_URL, &(), &self.token, oauth::HMAC_SHA1);

        let response = self
            .http
            .post(MEDIA_UPLOAD_URL)
            .header(AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TweetError::Service(format!("media upload failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "media upload rejected");
            return Err(TweetError::Service(format!(
                "media upload returned HTTP {}",
                status
            )));
        }

        let parsed: MediaUploadResponse = response
            .json()
            .await
            .map_err(|e| TweetError::Service(format!("unexpected media upload response: {}", e)))?;

        Ok(parsed.media_id_string)
    }
}

#[async_trait]
impl StatusClient for TwitterClient {
    async fn post_update(&self, message: &str, media: Option<&Path>) -> Result<PostedStatus> {
        encoding::check_encodable(message, self.input_encoding.as_deref())?;

        let media_id = match media {
            Some(path) => Some(self.upload_media(path).await?),
            None => None,
        };

        // The signed parameters must match the form body exactly
        let (authorization, body) = match &media_id {
            Some(id) => {
                let params = StatusUpdateWithMedia {
                    media_ids: id,
                    status: message,
                };
                (
                    oauth::post(UPDATE_URL, &params, &self.token, oauth::HMAC_SHA1),
                    oauth::to_form(&params),
                )
            }
            None => {
                let params = StatusUpdate { status: message };
                (
                    oauth::post(UPDATE_URL, &params, &self.token, oauth::HMAC_SHA1),
                    oauth::to_form(&params),
                )
            }
        };

        let response = self
            .http
            .post(UPDATE_URL)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| TweetError::Service(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "status update rejected");
            return Err(TweetError::Service(format!(
                "status update returned HTTP {}",
                status
            )));
        }

        let parsed: StatusResponse = response
            .json()
            .await
            .map_err(|e| TweetError::Service(format!("unexpected response: {}", e)))?;

        Ok(PostedStatus {
            author: parsed.user.name,
            text: parsed.text,
        })
    }
}
