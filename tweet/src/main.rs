//! tweet - post a message to Twitter
//!
//! One invocation performs one authenticated API call: load credentials
//! from the `tweetrc` file in the working directory, validate the inputs,
//! post, print the outcome, exit.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use libtweet::{MockClient, Result, StatusClient, TweetError, TweetRc, TwitterClient};

/// Environment variable selecting the posting client implementation.
/// `mock` and `mock-service` swap in the mock client for integration tests.
const CLIENT_ENV: &str = "TWEET_CLIENT";

#[derive(Parser, Debug)]
#[command(name = "tweet")]
#[command(about = "Post a message to Twitter", long_about = None)]
#[command(after_help = "Credentials are read from a `tweetrc` file in the current working \
directory, containing:\n\n\
[Tweet]\n\
consumer_key: *consumer_key*\n\
consumer_secret: *consumer_secret*\n\
access_key: *access_key*\n\
access_secret: *access_secret*\n\n\
Obtain the values from https://developer.twitter.com.")]
struct Cli {
    /// Message text to post
    message: String,

    /// Media file to attach
    media: Option<String>,

    /// Character set encoding of the message, e.g. "utf-8"
    #[arg(long)]
    encoding: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_writer(std::io::stderr)
            .init();
    }

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        if e.prints_usage() {
            let mut cmd = Cli::command();
            eprintln!("{}", cmd.render_usage());
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    // Media is resolved before the message is validated, and an invalid
    // media argument only warns; the post proceeds without an attachment.
    let media = match &cli.media {
        Some(arg) => {
            let resolved = resolve_media(arg, &cwd);
            if resolved.is_none() {
                eprintln!("Warning: Invalid media file.");
            }
            resolved
        }
        None => None,
    };

    if cli.message.is_empty() {
        return Err(TweetError::NoMessage);
    }

    let rc = TweetRc::load(&TweetRc::path_in(&cwd))?;
    let credentials = rc.credentials()?;

    let client = build_client(credentials, cli.encoding.clone());
    let status = client.post_update(&cli.message, media.as_deref()).await?;

    println!("{} just posted: {}", status.author, status.text);
    Ok(())
}

/// Resolve the media argument against the working directory.
///
/// An argument containing a path separator is checked as given. A bare
/// name is checked at `<cwd>` joined with a literal backslash, a quirk
/// kept from the original tool; on Unix that names a file whose final
/// component itself contains a backslash. In both branches the argument
/// is returned as given, not the probed path.
fn resolve_media(arg: &str, cwd: &Path) -> Option<PathBuf> {
    if arg.contains('/') || arg.contains('\\') {
        if Path::new(arg).is_file() {
            return Some(PathBuf::from(arg));
        }
        return None;
    }

    let probe = format!("{}\\{}", cwd.display(), arg);
    if Path::new(&probe).is_file() {
        return Some(PathBuf::from(arg));
    }
    None
}

fn build_client(
    credentials: libtweet::Credentials,
    encoding: Option<String>,
) -> Box<dyn StatusClient> {
    match std::env::var(CLIENT_ENV).as_deref() {
        Ok("mock") => Box::new(MockClient::from_env(encoding)),
        Ok("mock-service") => Box::new(MockClient::service_failure("simulated failure", encoding)),
        _ => Box::new(TwitterClient::new(credentials, encoding)),
    }
}
