use std::path::Path;
use std::process::Command;

use log::{debug, info};

use crate::config::Config;
use crate::utils::error::{BoxResult, DocsmithError};

/// Publish the built site to the configured git branch.
///
/// The site directory gets its own throwaway repository so the deploy commit
/// never touches the surrounding checkout; the commit is then pushed to the
/// configured remote's deploy branch.
pub fn deploy(
    config: &Config,
    message: Option<&str>,
    force: bool,
    ignore_version: bool,
) -> BoxResult<()> {
    if !config.site_dir.is_dir() {
        return Err(DocsmithError::Deploy(format!(
            "site directory not found: {}, build the site first",
            config.site_dir.display()
        ))
        .into());
    }

    run_git(&["rev-parse", "--is-inside-work-tree"], None)
        .map_err(|_| DocsmithError::Deploy("deploy requires a git checkout".to_string()))?;

    let remote_url = run_git(
        &["config", "--get", &format!("remote.{}.url", config.remote_name)],
        None,
    )
    .map_err(|_| {
        DocsmithError::Deploy(format!(
            "git remote '{}' is not configured",
            config.remote_name
        ))
    })?;

    if !ignore_version {
        check_deployed_version(config)?;
    }

    let sha = run_git(&["rev-parse", "--short", "HEAD"], None)
        .unwrap_or_else(|_| "unknown".to_string());
    let message = match message {
        Some(message) => message.to_string(),
        None => format!("Deployed {} with docsmith {}", sha, env!("CARGO_PKG_VERSION")),
    };

    info!("Committing the site to branch {}", config.remote_branch);
    let site_dir = &config.site_dir;
    run_git(&["init", "--quiet"], Some(site_dir))?;
    run_git(&["add", "--all"], Some(site_dir))?;
    run_git(
        &["commit", "--quiet", "--allow-empty", "-m", &message],
        Some(site_dir),
    )?;

    info!("Pushing to {}", config.remote_name);
    let refspec = format!("HEAD:refs/heads/{}", config.remote_branch);
    let mut push_args = vec!["push", "--quiet"];
    if force {
        push_args.push("--force");
    }
    push_args.push(remote_url.as_str());
    push_args.push(refspec.as_str());
    run_git(&push_args, Some(site_dir))?;

    Ok(())
}

/// Refuse to overwrite a deployment made by a newer docsmith.
fn check_deployed_version(config: &Config) -> BoxResult<()> {
    let deploy_ref = format!("{}/{}", config.remote_name, config.remote_branch);
    let subject = match run_git(&["log", "-1", "--pretty=%s", &deploy_ref], None) {
        Ok(subject) => subject,
        Err(_) => {
            debug!("No previous deployment found on {}", deploy_ref);
            return Ok(());
        }
    };

    let deployed = match parse_deployed_version(&subject) {
        Some(version) => version,
        None => {
            debug!("Previous deployment has no recorded version");
            return Ok(());
        }
    };

    if version_newer(&deployed, env!("CARGO_PKG_VERSION")) {
        return Err(DocsmithError::Deploy(format!(
            "the published site was deployed with docsmith {}, which is newer than this one, \
             use --ignore-version to deploy anyway",
            deployed
        ))
        .into());
    }

    Ok(())
}

/// Extract the version recorded in a generated deploy commit subject.
fn parse_deployed_version(subject: &str) -> Option<String> {
    let rest = subject.split("with docsmith ").nth(1)?;
    let version = rest.split_whitespace().next()?;
    if version.chars().next()?.is_ascii_digit() {
        Some(version.to_string())
    } else {
        None
    }
}

/// Compare dotted version strings component-wise.
fn version_newer(candidate: &str, current: &str) -> bool {
    let components = |version: &str| -> Vec<u64> {
        version
            .split('.')
            .map(|part| part.parse().unwrap_or(0))
            .collect()
    };
    components(candidate) > components(current)
}

/// Run a git subcommand, returning trimmed stdout.
fn run_git(args: &[&str], cwd: Option<&Path>) -> BoxResult<String> {
    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!("Running git {}", args.join(" "));
    let output = command.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DocsmithError::Deploy(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        ))
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
