//! Identity assertion sent with every upload.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value of the `assert` parameter on upload requests.
///
/// The server refuses the upload when the session does not match, which
/// catches an expired login before anything is written under the wrong name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assertion {
    /// The account must carry the bot flag (default).
    #[default]
    Bot,
    /// Any logged-in account.
    User,
}

impl Assertion {
    /// Wire value for the `assert` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Assertion::Bot => "bot",
            Assertion::User => "user",
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Assertion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bot" => Ok(Assertion::Bot),
            "user" => Ok(Assertion::User),
            _ => Err(format!("Unknown assertion: {}", s)),
        }
    }
}
