//! Submit command - send a form to the configured repository

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, Stylize};
use anstream::{eprintln, println};
use intake::auth::resolve_context;
use intake::config::Config;
use intake::error::{Error, Result};
use intake::form::FormStore;
use intake::repo::create_repo_service;
use intake::session::MemorySessionCache;
use intake::submit::{execute_submission, plan_submission, Outcome};
use intake::types::{FieldValue, Submission, Upload};
use std::path::PathBuf;

/// Arguments for the submit command
pub struct SubmitArgs {
    /// Issue or pull request title
    pub title: Option<String>,
    /// `key=value` form fields
    pub fields: Vec<String>,
    /// Labels to apply
    pub labels: Vec<String>,
    /// `field=path` file attachments
    pub attachments: Vec<String>,
    /// Serialized submission blob to use instead of the flags
    pub data: Option<PathBuf>,
}

/// Run the submit command
pub async fn run_submit(args: SubmitArgs) -> Result<()> {
    let config = Config::from_env()?;
    let context = resolve_context(&config).await?;

    let live = build_submission(&args).await?;

    let repo = create_repo_service(&config, &context)?;
    let cache = MemorySessionCache::new();
    let store = FormStore::new(&cache);
    let submission = store.resolve(live)?;

    let plan = plan_submission(&submission)?;

    println!(
        "Submitting {} to {}",
        plan.title.emphasis(),
        config.repo.to_string().accent()
    );

    let progress = CliProgress;
    let result = execute_submission(&plan, repo.as_ref(), &context, &progress).await?;
    store.clear();

    match &result.outcome {
        Outcome::IssueCreated(issue) => {
            println!("{} Opened issue #{}", check(), issue.number.accent());
        }
        Outcome::PullRequestCreated(pr) => {
            println!("{} Opened pull request #{}", check(), pr.number.accent());
        }
    }

    if !result.repo_access {
        eprintln!(
            "{}",
            "note: the submitting identity cannot view this repository".warn()
        );
    }

    Ok(())
}

async fn build_submission(args: &SubmitArgs) -> Result<Submission> {
    if let Some(path) = &args.data {
        let blob = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Parse(format!("cannot read {}: {e}", path.display())))?;
        return Submission::from_json(&blob)
            .map_err(|e| Error::Parse(format!("invalid submission data: {e}")));
    }

    let mut submission = Submission::new();

    if let Some(title) = &args.title {
        submission.insert("title", title.as_str().into());
    }

    for field in &args.fields {
        let (key, value) = split_pair(field, "field")?;
        submission.insert(key, value.into());
    }

    if !args.labels.is_empty() {
        submission.insert("labels", FieldValue::Labels(args.labels.clone()));
    }

    for attachment in &args.attachments {
        let (field, path) = split_pair(attachment, "attach")?;
        let path = PathBuf::from(path);
        let content = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::Parse(format!("cannot read {}: {e}", path.display())))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Parse(format!("no filename in {}", path.display())))?
            .to_string();
        submission.insert(field, FieldValue::Upload(Upload::new(filename, content)));
    }

    Ok(submission)
}

fn split_pair(raw: &str, flag: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| Error::Parse(format!("--{flag} expects key=value, got: {raw}")))
}
