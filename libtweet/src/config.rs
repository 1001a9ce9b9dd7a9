//! Credential configuration for the tweet tool
//!
//! Credentials live in a `tweetrc` file with a single `[Tweet]` section:
//!
//! ```ini
//! [Tweet]
//! consumer_key: *consumer_key*
//! consumer_secret: *consumer_secret*
//! access_key: *access_key*
//! access_secret: *access_secret*
//! ```

use std::path::{Path, PathBuf};

use configparser::ini::Ini;

use crate::error::{Result, TweetError};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tweetrc";

const CONFIG_SECTION: &str = "Tweet";

/// The four OAuth credential strings required to post as an account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_key: String,
    pub access_secret: String,
}

/// Loader for the `tweetrc` credential file.
///
/// Lookup failures never raise: a key that is absent, or a file that fails
/// to parse, reads back as `None`. Only a missing file is an error, and the
/// caller treats that as fatal before any posting is attempted.
pub struct TweetRc {
    ini: Ini,
}

impl TweetRc {
    /// The expected config path inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `TweetError::ConfigMissing` if `path` is not an existing
    /// file. A file that exists but is malformed is not an error; its keys
    /// simply read back as absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TweetError::ConfigMissing);
        }
        let mut ini = Ini::new();
        // Parse failures collapse to "no keys found"
        let _ = ini.load(path);
        Ok(Self { ini })
    }

    pub fn consumer_key(&self) -> Option<String> {
        self.get("consumer_key")
    }

    pub fn consumer_secret(&self) -> Option<String> {
        self.get("consumer_secret")
    }

    pub fn access_key(&self) -> Option<String> {
        self.get("access_key")
    }

    pub fn access_secret(&self) -> Option<String> {
        self.get("access_secret")
    }

    /// Collect all four credential values.
    ///
    /// # Errors
    ///
    /// Returns `TweetError::MissingCredentials` if any value is absent. The
    /// error does not say which one, matching the single undifferentiated
    /// "Missing credentials." condition.
    pub fn credentials(&self) -> Result<Credentials> {
        match (
            self.consumer_key(),
            self.consumer_secret(),
            self.access_key(),
            self.access_secret(),
        ) {
            (Some(consumer_key), Some(consumer_secret), Some(access_key), Some(access_secret)) => {
                Ok(Credentials {
                    consumer_key,
                    consumer_secret,
                    access_key,
                    access_secret,
                })
            }
            _ => Err(TweetError::MissingCredentials),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.ini.get(CONFIG_SECTION, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_tweetrc(dir: &TempDir, content: &str) -> PathBuf {
        let path = TweetRc::path_in(dir.path());
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_config_missing() {
        let dir = TempDir::new().unwrap();
        let result = TweetRc::load(&TweetRc::path_in(dir.path()));
        assert!(matches!(result, Err(TweetError::ConfigMissing)));
    }

    #[test]
    fn test_round_trip_all_four_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_tweetrc(
            &dir,
            "[Tweet]\n\
             consumer_key: ck-value\n\
             consumer_secret: cs-value\n\
             access_key: ak-value\n\
             access_secret: as-value\n",
        );

        let rc = TweetRc::load(&path).unwrap();
        assert_eq!(rc.consumer_key().as_deref(), Some("ck-value"));
        assert_eq!(rc.consumer_secret().as_deref(), Some("cs-value"));
        assert_eq!(rc.access_key().as_deref(), Some("ak-value"));
        assert_eq!(rc.access_secret().as_deref(), Some("as-value"));

        let credentials = rc.credentials().unwrap();
        assert_eq!(credentials.consumer_key, "ck-value");
        assert_eq!(credentials.consumer_secret, "cs-value");
        assert_eq!(credentials.access_key, "ak-value");
        assert_eq!(credentials.access_secret, "as-value");
    }

    #[test]
    fn test_equals_delimiter_also_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_tweetrc(
            &dir,
            "[Tweet]\n\
             consumer_key = ck\n\
             consumer_secret = cs\n\
             access_key = ak\n\
             access_secret = as\n",
        );

        let rc = TweetRc::load(&path).unwrap();
        assert!(rc.credentials().is_ok());
    }

    #[test]
    fn test_one_key_absent_is_missing_credentials() {
        let dir = TempDir::new().unwrap();
        let path = write_tweetrc(
            &dir,
            "[Tweet]\n\
             consumer_key: ck\n\
             consumer_secret: cs\n\
             access_key: ak\n",
        );

        let rc = TweetRc::load(&path).unwrap();
        // The three present keys still read back verbatim
        assert_eq!(rc.consumer_key().as_deref(), Some("ck"));
        assert_eq!(rc.consumer_secret().as_deref(), Some("cs"));
        assert_eq!(rc.access_key().as_deref(), Some("ak"));
        assert_eq!(rc.access_secret(), None);

        let result = rc.credentials();
        assert!(matches!(result, Err(TweetError::MissingCredentials)));
    }

    #[test]
    fn test_malformed_file_collapses_to_absent_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_tweetrc(&dir, "this is not an ini file\n\0\x01garbage");

        // Loading succeeds; every lookup is simply None
        let rc = TweetRc::load(&path).unwrap();
        assert_eq!(rc.consumer_key(), None);
        assert!(matches!(
            rc.credentials(),
            Err(TweetError::MissingCredentials)
        ));
    }

    #[test]
    fn test_wrong_section_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_tweetrc(
            &dir,
            "[Other]\n\
             consumer_key: ck\n\
             consumer_secret: cs\n\
             access_key: ak\n\
             access_secret: as\n",
        );

        let rc = TweetRc::load(&path).unwrap();
        assert!(matches!(
            rc.credentials(),
            Err(TweetError::MissingCredentials)
        ));
    }

    #[test]
    fn test_path_in_appends_file_name() {
        let path = TweetRc::path_in(Path::new("/some/dir"));
        assert_eq!(path, PathBuf::from("/some/dir/tweetrc"));
    }
}
