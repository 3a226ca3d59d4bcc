//! intake - submit web forms as GitHub issues and pull requests
//!
//! CLI binary driving the same submission pipeline the web front end uses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Submit web forms as GitHub issues and pull requests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a form to the configured repository
    Submit {
        /// Issue or pull request title
        #[arg(long)]
        title: Option<String>,

        /// Form field as key=value (repeatable)
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Label to apply (repeatable)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,

        /// File to attach as field=path (repeatable); any attachment turns
        /// the submission into a pull request
        #[arg(long = "attach", value_name = "FIELD=PATH")]
        attachments: Vec<String>,

        /// Read the whole submission from a serialized JSON blob instead
        #[arg(long, conflicts_with_all = ["title", "fields", "labels", "attachments"])]
        data: Option<PathBuf>,
    },

    /// Validate configuration and credentials
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            title,
            fields,
            labels,
            attachments,
            data,
        } => {
            cli::run_submit(cli::SubmitArgs {
                title,
                fields,
                labels,
                attachments,
                data,
            })
            .await?;
        }
        Commands::Check => {
            cli::run_check().await?;
        }
    }

    Ok(())
}
