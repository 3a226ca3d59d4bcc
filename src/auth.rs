//! Credential resolution
//!
//! Anonymous mode uses the deployment's shared token; otherwise a per-user
//! token is resolved from the gh CLI or the `GH_TOKEN` environment variable.
//! The web front end performs its own OAuth dance and constructs the
//! [`RequestContext`] directly; this module serves the CLI path.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::RequestContext;
use std::env;
use tokio::process::Command;

/// Resolve the credential acting for this invocation
///
/// Priority:
/// 1. Shared anonymous token from configuration
/// 2. gh CLI (`gh auth token`)
/// 3. `GH_TOKEN` environment variable
pub async fn resolve_context(config: &Config) -> Result<RequestContext> {
    if let Some(token) = &config.anonymous_token {
        return Ok(RequestContext::anonymous(token.clone()));
    }

    if let Some(token) = gh_cli_token().await {
        return Ok(RequestContext::user(token));
    }

    if let Ok(token) = env::var("GH_TOKEN") {
        if !token.is_empty() {
            return Ok(RequestContext::user(token));
        }
    }

    Err(Error::Auth(
        "no credential available; set GITHUB_TOKEN for anonymous mode or run `gh auth login`"
            .to_string(),
    ))
}

async fn gh_cli_token() -> Option<String> {
    // Check gh is available and authenticated
    let status = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .await
        .ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Verify a credential against the API and return the acting login
pub async fn test_credential(context: &RequestContext) -> Result<String> {
    let octocrab = octocrab::Octocrab::builder()
        .personal_token(context.token().to_string())
        .build()
        .map_err(|e| Error::Remote(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("invalid token: {e}")))?;

    Ok(user.login)
}
