#![warn(clippy::pedantic)]

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pr_commenter::{Commenter, Config};
use tokio::io::AsyncReadExt;
use tracing::Instrument;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();
    cli::load_env_file(Path::new(".env"));

    let cli = cli::Cli::parse();
    let config = Config::try_from(cli.config).context("invalid configuration")?;

    match cli.command {
        cli::Commands::Comment(args) => {
            let message = read_message(&args).await?;
            let commenter = Commenter::new(config)?;
            commenter
                .upsert_comment(&args.key, &message)
                .instrument(tracing::info_span!("comment", key = %args.key))
                .await
                .context("failed to create or update comment")?;
        }
        cli::Commands::ArtifactUrl { path } => {
            println!("{}", config.artifact_url(&path));
        }
    }
    Ok(())
}

async fn read_message(args: &cli::CommentArgs) -> Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }
    if let Some(file) = &args.file {
        return tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("failed to read message from {}", file.display()));
    }
    let mut message = String::new();
    tokio::io::stdin()
        .read_to_string(&mut message)
        .await
        .context("failed to read message from stdin")?;
    Ok(message)
}
