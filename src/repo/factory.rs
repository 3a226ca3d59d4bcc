//! Repository service factory

use crate::config::Config;
use crate::error::Result;
use crate::repo::{GitHubService, RepoService};
use crate::types::RequestContext;

/// Build the repository service for a resolved request context
pub fn create_repo_service(
    config: &Config,
    context: &RequestContext,
) -> Result<Box<dyn RepoService>> {
    Ok(Box::new(GitHubService::new(
        context.token(),
        config.repo.clone(),
        config.host.as_deref(),
    )?))
}
