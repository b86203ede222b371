use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pr_commenter::ConfigArgs;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create or update the tagged region of the pull request comment
    Comment(CommentArgs),
    /// Print the URL of a stored build artifact
    ArtifactUrl {
        /// Artifact path, appended to the build URL and home directory
        path: String,
    },
}

#[derive(Args)]
pub(crate) struct CommentArgs {
    /// Key of the tagged region, e.g. `testcoverage`
    pub(crate) key: String,
    /// Message (Markdown). Read from --file or stdin if omitted.
    #[arg(conflicts_with = "file")]
    pub(crate) message: Option<String>,
    /// Read the message from this file
    #[arg(long, short)]
    pub(crate) file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_comment() {
        let cli = temp_env::with_vars_unset(["GITHUB_TOKEN", "CIRCLE_PULL_REQUEST"], || {
            Cli::try_parse_from(["pr-commenter", "comment", "lighthouse", "## Results", "--pr", "3"])
        })
        .unwrap();
        assert_eq!(cli.config.pr.as_deref(), Some("3"));
        assert_eq!(cli.config.token, None);
        let Commands::Comment(args) = cli.command else {
            panic!("expected comment command");
        };
        assert_eq!(args.key, "lighthouse");
        assert_eq!(args.message.as_deref(), Some("## Results"));
        assert_eq!(args.file, None);
    }

    #[test]
    fn test_message_conflicts_with_file() {
        let res = Cli::try_parse_from(["pr-commenter", "comment", "k", "msg", "--file", "x.md"]);
        assert!(res.is_err());
    }
}
