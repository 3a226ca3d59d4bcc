//! Two-phase submission engine
//!
//! Turns a resolved submission into an issue or a pull request:
//! 1. Planning - validate the submission and pick the route (no remote calls)
//! 2. Execution - drive the remote operations, strictly in sequence

mod execute;
mod plan;
mod progress;

pub use execute::{check_repo_access, execute_submission, Outcome, SubmissionResult};
pub use plan::{plan_submission, Route, SubmissionPlan};
pub use progress::{FileStatus, NoopProgress, Phase, ProgressCallback};
