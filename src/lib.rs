//! Create or update a single tagged pull request comment from CI.
//!
//! ```no_run
//! # async fn run() -> Result<(), pr_commenter::Error> {
//! let commenter = pr_commenter::Commenter::new(pr_commenter::Config::from_env()?)?;
//! let report = commenter.artifact_url("/app/coverage/lcov-report/index.html");
//! commenter
//!     .upsert_comment("testcoverage", &format!("## Test coverage\n\n[View coverage]({report})"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
#![warn(clippy::pedantic)]

pub mod commenter;
pub mod config;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod models;
mod octocrab_utils;
pub mod region;

pub use commenter::{Commenter, Upserted};
pub use config::{Config, ConfigArgs};
pub use error::{ConfigError, Error, Result};
pub use models::RemoteComment;
