//! Progress callback trait for interface-agnostic updates
//!
//! Lets different surfaces (CLI, web server) report on a submission while
//! it runs without the orchestrator knowing how output is rendered.

use crate::error::Error;
use crate::types::{Issue, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Execution phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Creating an issue (no uploads present)
    CreatingIssue,
    /// Reading default branch, head SHA, and branch list
    FetchingRepoState,
    /// Creating the new branch ref
    CreatingBranch,
    /// Committing uploaded files to the branch
    CommittingFiles,
    /// Opening the pull request
    CreatingPullRequest,
    /// Post-creation repository access check
    CheckingAccess,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CreatingIssue => "Creating issue",
            Self::FetchingRepoState => "Fetching repository state",
            Self::CreatingBranch => "Creating branch",
            Self::CommittingFiles => "Committing files",
            Self::CreatingPullRequest => "Creating pull request",
            Self::CheckingAccess => "Checking repository access",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Status of one file commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Commit started
    Started,
    /// Commit succeeded
    Committed,
    /// Commit failed with error message
    Failed(String),
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called around each file commit
    async fn on_file_commit(&self, field: &str, filename: &str, status: FileStatus);

    /// Called when the issue is created
    async fn on_issue_created(&self, issue: &Issue);

    /// Called when the pull request is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when a non-fatal error occurs
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for tests or headless callers
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_file_commit(&self, _field: &str, _filename: &str, _status: FileStatus) {}
    async fn on_issue_created(&self, _issue: &Issue) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
