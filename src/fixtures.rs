use crate::config::vars;

pub(crate) const ENV: [(&str, Option<&str>); 10] = [
    (vars::OWNER, Some("fumler")),
    (vars::REPO, Some("circleci-pr-commenter")),
    (vars::BRANCH, Some("feature/test")),
    (vars::BUILD_URL, Some("https://build-url.dev")),
    (vars::PULL_REQUEST, Some("15")),
    (vars::TOKEN, Some("token")),
    (vars::TOKEN_USER, Some("tokenuser")),
    (vars::SHA1, Some("xxx")),
    (vars::HOME, Some("/home/circle")),
    (vars::API_URL, None),
];

/// Comment list as returned by `GET /repos/{owner}/{repo}/issues/{pr}/comments`
pub(crate) const COMMENTS: &str = r#"[
  {
    "id": 1,
    "node_id": "MDEyOklzc3VlQ29tbWVudDE=",
    "url": "https://api.github.com/repos/fumler/circleci-pr-commenter/issues/comments/1",
    "html_url": "https://github.com/fumler/circleci-pr-commenter/pull/15#issuecomment-1",
    "body": "LGTM",
    "user": {
      "login": "someone-else",
      "id": 1,
      "type": "User",
      "site_admin": false
    },
    "created_at": "2019-05-02T09:00:00Z",
    "updated_at": "2019-05-02T09:00:00Z"
  },
  {
    "id": 2,
    "node_id": "MDEyOklzc3VlQ29tbWVudDI=",
    "url": "https://api.github.com/repos/fumler/circleci-pr-commenter/issues/comments/2",
    "html_url": "https://github.com/fumler/circleci-pr-commenter/pull/15#issuecomment-2",
    "body": "This is an exisiting comment.",
    "user": {
      "login": "tokenuser",
      "id": 2,
      "type": "User",
      "site_admin": false
    },
    "created_at": "2019-05-02T10:00:00Z",
    "updated_at": "2019-05-02T10:00:00Z"
  }
]"#;
