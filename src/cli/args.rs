//! Command-line argument definitions using clap.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Assertion, Config, JobConfig};
use crate::error::exit_codes;

/// MediaWiki bulk upload CLI.
#[derive(Parser, Debug)]
#[command(
    name = "mw-bulk-upload",
    version,
    about = "Upload every file in a folder to a MediaWiki wiki",
    long_about = "Logs in to a MediaWiki Action API endpoint and uploads the files of a folder \
                  one by one, in sorted order, starting from a 1-based offset.\n\n\
                  The password is prompted for interactively."
)]
pub struct Args {
    /// Full URL of the wiki's api.php.
    pub api_endpoint: String,

    /// Account (or bot password) name to log in as.
    pub username: String,

    /// Upload summary used as the file page comment.
    pub summary: String,

    /// Folder whose files are uploaded.
    pub image_folder: PathBuf,

    /// 1-based position of the first file to upload in the sorted listing.
    pub image_offset: usize,

    /// Path to an optional settings file.
    #[arg(short, long, default_value = "mw-bulk-upload.toml")]
    pub config: PathBuf,

    /// User-agent string sent with every request.
    #[arg(long = "user-agent", env = "MW_UPLOAD_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Identity assertion sent with every upload.
    #[arg(long = "assert", value_enum)]
    pub assertion: Option<AssertionArg>,

    /// Replication lag ceiling in seconds.
    #[arg(long)]
    pub maxlag: Option<u32>,

    /// Seconds to wait before retrying a rate-limited upload.
    #[arg(long = "ratelimit-wait")]
    pub ratelimit_wait: Option<u64>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI assertion argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AssertionArg {
    /// The account must carry the bot flag.
    Bot,
    /// Any logged-in account.
    User,
}

impl From<AssertionArg> for Assertion {
    fn from(arg: AssertionArg) -> Self {
        match arg {
            AssertionArg::Bot => Assertion::Bot,
            AssertionArg::User => Assertion::User,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.job = JobConfig {
            api_endpoint: self.api_endpoint,
            username: self.username,
            summary: self.summary,
            image_folder: self.image_folder,
            image_offset: self.image_offset,
        };

        if let Some(user_agent) = self.user_agent {
            config.client.user_agent = user_agent;
        }

        if let Some(assertion) = self.assertion {
            config.upload.assert = assertion.into();
        }

        if let Some(maxlag) = self.maxlag {
            config.upload.maxlag = maxlag;
        }

        if let Some(wait) = self.ratelimit_wait {
            config.upload.ratelimit_wait_seconds = wait;
        }
    }
}

/// Exit code for a failed parse.
///
/// Help and version requests are not failures; every other parse error
/// (wrong number of positionals, non-numeric offset) is a usage error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => exit_codes::SUCCESS,
        _ => exit_codes::USAGE,
    }
}
