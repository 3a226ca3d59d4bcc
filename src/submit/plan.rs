//! Phase 1: Submission planning
//!
//! Validates the submission and decides the route. Planning never touches
//! the remote; a submission that fails validation costs no API calls.

use crate::error::{Error, Result};
use crate::form::{render_body, uploads};
use crate::types::{Submission, Upload};

/// Which creation path a submission takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No uploads: create an issue
    Issue,
    /// Uploads present: create a branch, commit the files, open a PR
    PullRequest {
        /// Upload fields in extraction order (drives commit order)
        uploads: Vec<(String, Upload)>,
    },
}

/// Everything execution needs, derived from one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    /// Issue/PR title (trimmed)
    pub title: String,
    /// Rendered Markdown body
    pub body: String,
    /// Labels to apply; empty when the submission has none
    pub labels: Vec<String>,
    /// Issue or pull-request path
    pub route: Route,
}

/// Validate a submission and build its plan
pub fn plan_submission(submission: &Submission) -> Result<SubmissionPlan> {
    let title = submission.title().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(Error::Validation("title must not be empty".to_string()));
    }

    let uploads: Vec<(String, Upload)> = uploads(submission)
        .into_iter()
        .map(|(name, upload)| (name.to_string(), upload.clone()))
        .collect();

    let route = if uploads.is_empty() {
        Route::Issue
    } else {
        Route::PullRequest { uploads }
    };

    Ok(SubmissionPlan {
        title: title.to_string(),
        body: render_body(submission),
        labels: submission.labels().to_vec(),
        route,
    })
}
