use std::net::SocketAddr;

use log::{debug, info, warn};

use crate::builder;
use crate::cli::types::{LiveReloadMode, ServeOptions};
use crate::config;
use crate::utils::error::BoxResult;

/// Handle the serve command
pub fn handle_serve_command(options: &ServeOptions) -> BoxResult<()> {
    let config = config::load_config(options.config_file.as_deref(), &options.overrides)?;

    // Validated during config load, parsed again here for display
    let addr: SocketAddr = config.dev_addr.parse()?;

    match options.livereload {
        LiveReloadMode::LiveReload => debug!("Browser reload requested for changes"),
        LiveReloadMode::NoLiveReload => debug!("Browser reload disabled"),
        LiveReloadMode::Dirty => debug!("Dirty rebuilds requested for changes"),
    }
    if options.watch_theme {
        warn!("Theme watching is not available in this build");
    }

    info!("Building documentation before serving...");
    let dirty = matches!(options.livereload, LiveReloadMode::Dirty);
    builder::build_site(&config, dirty)?;

    info!("Site ready at {}", config.site_dir.display());
    info!(
        "Serve it on http://{}/ with the static file server of your choice",
        addr
    );

    Ok(())
}
