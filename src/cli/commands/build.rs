use log::info;

use crate::builder;
use crate::cli::types::BuildOptions;
use crate::config;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(options: &BuildOptions) -> BoxResult<()> {
    let config = config::load_config(options.config_file.as_deref(), &options.overrides)?;

    info!("Building documentation to {}", config.site_dir.display());
    let stats = builder::build_site(&config, options.dirty)?;
    info!(
        "Documentation built in {:.2}s ({} pages, {} assets)",
        stats.elapsed.as_secs_f64(),
        stats.pages,
        stats.assets
    );

    Ok(())
}
