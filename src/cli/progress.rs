//! CLI progress callback with styled output

use crate::cli::style::{check, cross, hyperlink_url, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use intake::error::Error;
use intake::submit::{FileStatus, Phase, ProgressCallback};
use intake::types::{Issue, PullRequest};

/// Progress callback that prints each step to the terminal
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => {}
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_file_commit(&self, _field: &str, filename: &str, status: FileStatus) {
        match status {
            FileStatus::Started => {
                println!("  Committing {}...", filename.accent());
            }
            FileStatus::Committed => {
                println!("  {} {}", check(), filename.emphasis());
            }
            FileStatus::Failed(msg) => {
                eprintln!(
                    "  {} {}: {}",
                    cross(),
                    filename.accent().for_stderr(),
                    msg.error()
                );
            }
        }
    }

    async fn on_issue_created(&self, issue: &Issue) {
        println!("  {} Created issue #{}", check(), issue.number.accent());
        println!("    {}", hyperlink_url(Stream::Stdout, &issue.html_url));
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        println!(
            "  {} Created PR #{} ({} → {})",
            check(),
            pr.number.accent(),
            pr.head_ref.accent(),
            pr.base_ref.accent()
        );
        println!("    {}", hyperlink_url(Stream::Stdout, &pr.html_url));
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("{}: {}", "error".error(), error);
    }

    async fn on_message(&self, message: &str) {
        println!("  {}", message.muted());
    }
}
