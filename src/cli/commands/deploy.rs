use log::info;

use crate::builder;
use crate::cli::types::DeployOptions;
use crate::config;
use crate::deploy;
use crate::utils::error::BoxResult;

/// Handle the deploy command
pub fn handle_deploy_command(options: &DeployOptions) -> BoxResult<()> {
    let config = config::load_config(options.config_file.as_deref(), &options.overrides)?;

    info!("Building documentation before deploying...");
    builder::build_site(&config, options.dirty)?;

    deploy::deploy(
        &config,
        options.message.as_deref(),
        options.force,
        options.ignore_version,
    )?;

    info!(
        "Deployed {} to {}/{}",
        config.site_dir.display(),
        config.remote_name,
        config.remote_branch
    );

    Ok(())
}
