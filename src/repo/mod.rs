//! Repository services
//!
//! The narrow facade over remote repository operations the orchestrator
//! depends on. Everything remote goes through [`RepoService`], so tests can
//! substitute a recording mock and the orchestrator stays free of API
//! details.

mod factory;
mod github;

pub use factory::create_repo_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Branch, Issue, PullRequest, RepoTarget};
use async_trait::async_trait;

/// Remote repository operations
///
/// One orchestration run re-reads repository state through these methods
/// every time; implementations must not cache branch lists or SHAs across
/// runs (stale-SHA window).
#[async_trait]
pub trait RepoService: Send + Sync {
    /// All branches with their current head SHAs
    async fn list_branches(&self) -> Result<Vec<Branch>>;

    /// Name of the repository's default branch
    async fn default_branch(&self) -> Result<String>;

    /// Create a branch ref pointing at `sha`
    async fn create_ref(&self, branch: &str, sha: &str) -> Result<()>;

    /// Commit `content` to `path` on `branch`
    async fn put_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<()>;

    /// Open an issue
    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> Result<Issue>;

    /// Open a pull request from `head` into `base`
    async fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<PullRequest>;

    /// Whether the repository is private
    async fn is_private(&self) -> Result<bool>;

    /// The repository this service talks to
    fn target(&self) -> &RepoTarget;
}
