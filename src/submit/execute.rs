//! Phase 2: Submission execution
//!
//! Drives the remote operations for a planned submission. The pull-request
//! path is a strict sequence - fetch repository state, create the branch,
//! commit each file, open the PR - because each step consumes the previous
//! step's output. Remote failures terminate the run; nothing is retried and
//! nothing is rolled back.

use crate::branch::next_available;
use crate::error::{Error, Result};
use crate::repo::RepoService;
use crate::submit::{FileStatus, Phase, ProgressCallback, Route, SubmissionPlan};
use crate::types::{Issue, PullRequest, RequestContext, Upload};
use std::collections::HashSet;

/// Terminal success state of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An issue was created
    IssueCreated(Issue),
    /// A pull request was created
    PullRequestCreated(PullRequest),
}

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// What was created
    pub outcome: Outcome,
    /// Whether the acting identity can view the target repository
    /// (informational; anonymous submitters cannot view private repos)
    pub repo_access: bool,
}

/// Execute a submission plan against the repository
pub async fn execute_submission(
    plan: &SubmissionPlan,
    repo: &dyn RepoService,
    context: &RequestContext,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionResult> {
    let outcome = match &plan.route {
        Route::Issue => {
            progress.on_phase(Phase::CreatingIssue).await;
            let issue = repo
                .create_issue(&plan.title, &plan.body, &plan.labels)
                .await?;
            tracing::info!(number = issue.number, "created issue");
            progress.on_issue_created(&issue).await;
            Outcome::IssueCreated(issue)
        }
        Route::PullRequest { uploads } => {
            create_pull_request(plan, uploads, repo, progress).await?
        }
    };

    progress.on_phase(Phase::CheckingAccess).await;
    let repo_access = check_repo_access(context, repo, progress).await;

    progress.on_phase(Phase::Complete).await;

    Ok(SubmissionResult {
        outcome,
        repo_access,
    })
}

async fn create_pull_request(
    plan: &SubmissionPlan,
    uploads: &[(String, Upload)],
    repo: &dyn RepoService,
    progress: &dyn ProgressCallback,
) -> Result<Outcome> {
    progress.on_phase(Phase::FetchingRepoState).await;

    // Default branch and head SHA are read fresh every run; caching them
    // across runs widens the stale-SHA window.
    let default = repo.default_branch().await?;
    let branches = repo.list_branches().await?;

    let head_sha = branches
        .iter()
        .find(|b| b.name == default)
        .map(|b| b.head_sha.clone())
        .ok_or_else(|| Error::Remote(format!("default branch {default} not in branch list")))?;

    let names: HashSet<String> = branches.into_iter().map(|b| b.name).collect();
    let branch = next_available(&plan.title, &names);

    progress.on_phase(Phase::CreatingBranch).await;
    progress
        .on_message(&format!("Branching {branch} from {default}"))
        .await;

    // A concurrent submission can take the name between the uniqueness check
    // and this call; the resulting remote error is surfaced, not retried.
    repo.create_ref(&branch, &head_sha).await?;
    tracing::debug!(branch = %branch, sha = %head_sha, "created branch");

    progress.on_phase(Phase::CommittingFiles).await;

    for (field, upload) in uploads {
        progress
            .on_file_commit(field, &upload.filename, FileStatus::Started)
            .await;

        let message = format!("Create {}", upload.filename);
        match repo
            .put_file(&upload.filename, &message, &upload.content, &branch)
            .await
        {
            Ok(()) => {
                progress
                    .on_file_commit(field, &upload.filename, FileStatus::Committed)
                    .await;
            }
            Err(e) => {
                progress
                    .on_file_commit(field, &upload.filename, FileStatus::Failed(e.to_string()))
                    .await;
                // Files already committed stay on the branch.
                return Err(e);
            }
        }
    }

    progress.on_phase(Phase::CreatingPullRequest).await;

    let pr = repo
        .create_pull_request(&default, &branch, &plan.title, &plan.body, &plan.labels)
        .await?;
    tracing::info!(number = pr.number, head = %branch, "created pull request");
    progress.on_pr_created(&pr).await;

    Ok(Outcome::PullRequestCreated(pr))
}

/// Whether the acting identity can view the target repository
///
/// A user credential implies access (the user just created content there).
/// The shared anonymous credential only counts as access when the repository
/// is public. Any failure during the check is downgraded to "no access" -
/// this is informational, never a hard error.
pub async fn check_repo_access(
    context: &RequestContext,
    repo: &dyn RepoService,
    progress: &dyn ProgressCallback,
) -> bool {
    if !context.is_anonymous() {
        return true;
    }

    match repo.is_private().await {
        Ok(private) => !private,
        Err(e) => {
            tracing::warn!(error = %e, "access check failed; reporting no access");
            progress.on_error(&e).await;
            false
        }
    }
}
