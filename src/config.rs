use clap::Args;
use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variables the configuration is read from.
pub mod vars {
    pub const OWNER: &str = "CIRCLE_PROJECT_USERNAME";
    pub const REPO: &str = "CIRCLE_PROJECT_REPONAME";
    pub const BRANCH: &str = "CIRCLE_BRANCH";
    pub const BUILD_URL: &str = "CIRCLE_BUILD_URL";
    pub const PULL_REQUEST: &str = "CIRCLE_PULL_REQUEST";
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const TOKEN_USER: &str = "GITHUB_TOKEN_USERNAME";
    pub const SHA1: &str = "CIRCLE_SHA1";
    pub const HOME: &str = "HOME";
    pub const API_URL: &str = "GITHUB_API_URL";
}

/// Unvalidated configuration values, as passed on the command line or found in the environment.
#[derive(Args, Clone, Default)]
pub struct ConfigArgs {
    /// User or organization owning the repository
    #[arg(long, env = vars::OWNER, global = true)]
    pub owner: Option<String>,
    /// Repository name
    #[arg(long, env = vars::REPO, global = true)]
    pub repo: Option<String>,
    /// Branch being built
    #[arg(long, env = vars::BRANCH, global = true)]
    pub branch: Option<String>,
    /// URL of the CI build, used to link to stored artifacts
    #[arg(long, env = vars::BUILD_URL, global = true)]
    pub build_url: Option<String>,
    /// Pull request number or URL
    #[arg(long, env = vars::PULL_REQUEST, global = true)]
    pub pr: Option<String>,
    /// GitHub token used to read and write comments
    #[arg(long, env = vars::TOKEN, hide_env_values = true, global = true)]
    pub token: Option<String>,
    /// Login of the token’s user. Comments by this user are updated instead of duplicated.
    #[arg(long, env = vars::TOKEN_USER, global = true)]
    pub token_user: Option<String>,
    /// Commit being built
    #[arg(long, env = vars::SHA1, global = true)]
    pub sha1: Option<String>,
    /// Base path artifacts are stored under
    #[arg(long, env = vars::HOME, global = true)]
    pub home: Option<String>,
    /// GitHub REST API base URI (default: https://api.github.com)
    #[arg(long, env = vars::API_URL, global = true)]
    pub api_url: Option<String>,
}

impl ConfigArgs {
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name| std::env::var(name).ok();
        Self {
            owner: var(vars::OWNER),
            repo: var(vars::REPO),
            branch: var(vars::BRANCH),
            build_url: var(vars::BUILD_URL),
            pr: var(vars::PULL_REQUEST),
            token: var(vars::TOKEN),
            token_user: var(vars::TOKEN_USER),
            sha1: var(vars::SHA1),
            home: var(vars::HOME),
            api_url: var(vars::API_URL),
        }
    }
}

/// Validated, read-only configuration of a [`Commenter`](crate::Commenter).
#[derive(Debug, Clone)]
pub struct Config {
    owner: String,
    repo: String,
    branch: String,
    build_url: String,
    pr: u64,
    token: SecretString,
    token_user: String,
    sha1: String,
    home: String,
    api_url: Option<String>,
}

impl Config {
    /// Reads and validates the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] listing every absent or empty variable, or
    /// [`ConfigError::InvalidPullRequest`].
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigArgs::from_env().try_into()
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn build_url(&self) -> &str {
        &self.build_url
    }

    #[must_use]
    pub fn pr(&self) -> u64 {
        self.pr
    }

    #[must_use]
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Login whose comments are considered ours.
    #[must_use]
    pub fn token_user(&self) -> &str {
        &self.token_user
    }

    #[must_use]
    pub fn sha1(&self) -> &str {
        &self.sha1
    }

    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }

    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// URL of a stored build artifact. `path` is appended as-is.
    #[must_use]
    pub fn artifact_url(&self, path: &str) -> String {
        format!("{}/artifacts/0{}{path}", self.build_url, self.home)
    }
}

impl TryFrom<ConfigArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: ConfigArgs) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, name: &'static str| {
            let value = value.filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };
        let owner = require(args.owner, vars::OWNER);
        let repo = require(args.repo, vars::REPO);
        let branch = require(args.branch, vars::BRANCH);
        let build_url = require(args.build_url, vars::BUILD_URL);
        let pr = require(args.pr, vars::PULL_REQUEST);
        let token = require(args.token, vars::TOKEN);
        let token_user = require(args.token_user, vars::TOKEN_USER);
        let sha1 = require(args.sha1, vars::SHA1);
        let home = require(args.home, vars::HOME);
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let pr = parse_pull_request(&pr).ok_or(ConfigError::InvalidPullRequest(pr))?;
        Ok(Self {
            owner,
            repo,
            branch,
            build_url,
            pr,
            token: token.into(),
            token_user,
            sha1,
            home,
            api_url: args.api_url.filter(|u| !u.is_empty()),
        })
    }
}

/// Accepts `15` as well as `https://github.com/owner/repo/pull/15`.
fn parse_pull_request(value: &str) -> Option<u64> {
    let value = value.trim();
    let number = match value.rsplit_once("/pull/") {
        Some((_, number)) => number.trim_end_matches('/'),
        None => value,
    };
    number.parse().ok().filter(|&n| n > 0)
}
