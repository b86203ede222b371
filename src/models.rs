use chrono::{DateTime, Utc};
use octocrab::models::CommentId;
use serde::{Deserialize, Serialize};

/// A stripped down version of [`octocrab::models::issues::Comment`].
/// Only `id` and `user.login` are required, so sparse API responses still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteComment {
    pub id: CommentId,
    pub user: Login,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Login {
    pub login: String,
}

/// Request body for creating or updating a comment.
#[derive(Debug, Serialize)]
pub(crate) struct CommentBody<'a> {
    pub body: &'a str,
}
