use std::sync::Arc;

use octocrab::{
    models::CommentId, service::middleware::retry::RetryConfig, Octocrab, Page,
};
use secrecy::ExposeSecret;
use tracing::Instrument;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::models::{CommentBody, RemoteComment};
use crate::octocrab_utils::PageExt;
use crate::region::{self, Key};

/// Creates or updates the one pull request comment owned by the configured token user.
#[derive(Debug, Clone)]
pub struct Commenter {
    config: Config,
    github: Arc<Octocrab>,
}

/// Which write [`Commenter::upsert_comment`] performed, with the comment as returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created(RemoteComment),
    Updated(RemoteComment),
}

impl Upserted {
    #[must_use]
    pub fn comment(&self) -> &RemoteComment {
        match self {
            Upserted::Created(comment) | Upserted::Updated(comment) => comment,
        }
    }
}

impl Commenter {
    /// Builds a GitHub client authenticated with the configured token.
    ///
    /// Failed requests are not retried, so a write reported as failed is never sent twice.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidApiUrl`] if the configured API URL is not a valid URI, or
    /// [`Error::Transport`](crate::Error::Transport) if the client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder =
            Octocrab::builder().personal_token(config.token().expose_secret().to_owned());
        builder.add_retry_config(RetryConfig::None);
        if let Some(api_url) = config.api_url() {
            builder = builder
                .base_uri(api_url)
                .map_err(|_| ConfigError::InvalidApiUrl(api_url.to_owned()))?;
        }
        let github = builder.build()?;
        Ok(Self::with_client(config, Arc::new(github)))
    }

    /// Uses `github` as is. Its retry configuration is the caller’s responsibility.
    #[must_use]
    pub fn with_client(config: Config, github: Arc<Octocrab>) -> Self {
        Self { config, github }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// See [`Config::artifact_url`].
    #[must_use]
    pub fn artifact_url(&self, path: &str) -> String {
        self.config.artifact_url(path)
    }

    /// Publishes `message` in the region tagged with `key`.
    ///
    /// The first comment on the pull request written by the token user is updated: an existing
    /// region’s content is replaced, otherwise a new region is appended. Without such a comment,
    /// a new one containing only the region is created.
    ///
    /// Every call fetches the comment list again and performs at most one write.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) before any request if `key` is not a
    /// valid [`Key`], [`Error::Transport`](crate::Error::Transport) if listing or writing fails.
    pub async fn upsert_comment(&self, key: &str, message: &str) -> Result<Upserted> {
        let key = Key::new(key)?;
        let span = tracing::info_span!("upsert_comment", %key, pr = self.config.pr());
        self.upsert(&key, message).instrument(span).await
    }

    async fn upsert(&self, key: &Key, message: &str) -> Result<Upserted> {
        let (owner, repo, pr) = (self.config.owner(), self.config.repo(), self.config.pr());
        tracing::info!("Updating comment for {owner}/{repo}’s PR {pr}");

        if let Some(existing) = self.find_own_comment().await? {
            tracing::debug!("Found comment {} by {}", existing.id, existing.user.login);
            let body = region::splice(existing.body.as_deref().unwrap_or_default(), key, message);
            let comment: RemoteComment = self
                .github
                .patch(self.comment_route(existing.id), Some(&CommentBody { body: &body }))
                .await?;
            tracing::info!("Updated comment at {}", display_url(&comment));
            Ok(Upserted::Updated(comment))
        } else {
            let body = region::fragment(key, message);
            let comment: RemoteComment = self
                .github
                .post(self.comments_route(), Some(&CommentBody { body: &body }))
                .await?;
            tracing::info!("Created comment at {}", display_url(&comment));
            Ok(Upserted::Created(comment))
        }
    }

    async fn find_own_comment(&self) -> Result<Option<RemoteComment>> {
        let login = self.config.token_user();
        let page: Page<RemoteComment> = self
            .github
            .get(self.comments_route(), Some(&[("per_page", 100)]))
            .await?;
        page.find(&self.github, |comment| comment.user.login == login)
            .await
    }

    fn comments_route(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.config.owner(),
            self.config.repo(),
            self.config.pr()
        )
    }

    fn comment_route(&self, id: CommentId) -> String {
        format!(
            "/repos/{}/{}/issues/comments/{id}",
            self.config.owner(),
            self.config.repo()
        )
    }
}

fn display_url(comment: &RemoteComment) -> &str {
    comment.html_url.as_deref().unwrap_or("<unknown URL>")
}
