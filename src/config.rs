//! Environment-variable configuration
//!
//! Everything the deployment controls comes from the environment and is
//! validated once at startup, before any submission is served. An invalid
//! environment is a [`Error::Config`] here rather than a surprise halfway
//! through a request.

use crate::error::{Error, Result};
use crate::types::RepoTarget;
use std::env;

/// Deployment configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Target repository for issues and pull requests (`GITHUB_REPO`)
    pub repo: RepoTarget,
    /// Shared token for anonymous submissions (`GITHUB_TOKEN`); anonymous
    /// mode is active iff this is set
    pub anonymous_token: Option<String>,
    /// Team gate for the external OAuth layer (`GITHUB_TEAM_ID`)
    pub team_id: Option<u64>,
    /// Organization gate for the external OAuth layer (`GITHUB_ORG_ID`)
    pub org_id: Option<String>,
    /// GitHub Enterprise host (`GITHUB_HOST`); `None` for github.com
    pub host: Option<String>,
}

impl Config {
    /// Read and validate configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read and validate configuration from an arbitrary lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let repo = non_empty(lookup("GITHUB_REPO"))
            .ok_or_else(|| Error::Config("GITHUB_REPO must be set".to_string()))?
            .parse::<RepoTarget>()
            .map_err(|e| Error::Config(e.to_string()))?;

        let anonymous_token = non_empty(lookup("GITHUB_TOKEN"));

        let team_id = non_empty(lookup("GITHUB_TEAM_ID"))
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| Error::Config(format!("GITHUB_TEAM_ID is not a number: {raw}")))
            })
            .transpose()?;

        let org_id = non_empty(lookup("GITHUB_ORG_ID"));
        let host = non_empty(lookup("GITHUB_HOST"));

        // Without any of these there is no way to authenticate a submission.
        if anonymous_token.is_none() && team_id.is_none() && org_id.is_none() {
            return Err(Error::Config(
                "must define GITHUB_TOKEN, GITHUB_TEAM_ID, or GITHUB_ORG_ID".to_string(),
            ));
        }

        Ok(Self {
            repo,
            anonymous_token,
            team_id,
            org_id,
            host,
        })
    }

    /// Whether the deployment accepts anonymous submissions
    #[must_use]
    pub const fn anonymous_submissions(&self) -> bool {
        self.anonymous_token.is_some()
    }
}

/// Treat unset and empty environment variables the same way
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
