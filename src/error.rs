use thiserror::Error;

/// Errors surfaced by [`Commenter`](crate::Commenter) and [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid comment key {0:?}: only ASCII letters, digits, `-`, `_` and `.` are allowed")]
    InvalidKey(String),
    /// A GitHub API call failed, either on the wire or with a non-success status.
    #[error("GitHub API request failed: {0}")]
    Transport(#[source] Box<octocrab::Error>),
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        Error::Transport(Box::new(error))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lists the environment variable names of every missing value.
    #[error("Missing environment variables:\n{}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("CIRCLE_PULL_REQUEST is neither a pull request number nor URL: {0:?}")]
    InvalidPullRequest(String),
    #[error("GITHUB_API_URL is not a valid URI: {0:?}")]
    InvalidApiUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
