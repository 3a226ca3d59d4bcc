//! Check command - validate configuration and credentials

use crate::cli::style::{check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use indicatif::ProgressBar;
use intake::auth::{resolve_context, test_credential};
use intake::config::Config;
use intake::error::Result;
use intake::repo::create_repo_service;
use intake::submit::{check_repo_access, NoopProgress};
use std::time::Duration;

/// Run the check command
pub async fn run_check() -> Result<()> {
    let config = Config::from_env()?;

    println!("Repository: {}", config.repo.to_string().accent());
    println!(
        "Mode: {}",
        if config.anonymous_submissions() {
            "anonymous (shared token)"
        } else {
            "authenticated users"
        }
    );
    if let Some(team) = config.team_id {
        println!("Team gate: {}", team.accent());
    }
    if let Some(org) = &config.org_id {
        println!("Organization gate: {}", org.accent());
    }

    let context = resolve_context(&config).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Verifying credentials...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let login = test_credential(&context).await;
    spinner.finish_and_clear();
    let login = login?;

    println!("{} Authenticated as {}", check(), login.emphasis());

    let repo = create_repo_service(&config, &context)?;
    if check_repo_access(&context, repo.as_ref(), &NoopProgress).await {
        println!(
            "{} Submitters can view {}",
            check(),
            config.repo.to_string().accent()
        );
    } else {
        eprintln!(
            "{} Anonymous submitters cannot view {}",
            cross(),
            config.repo.to_string().accent().for_stderr()
        );
    }

    Ok(())
}
