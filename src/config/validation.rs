use std::net::SocketAddr;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, DocsmithError};

/// Validate the loaded configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    if config.site_name.trim().is_empty() {
        return Err(DocsmithError::Config("site_name must not be empty".to_string()).into());
    }

    if config.docs_dir == config.site_dir {
        return Err(DocsmithError::Config(format!(
            "docs_dir and site_dir must differ, both are {}",
            config.docs_dir.display()
        ))
        .into());
    }

    // A site directory nested in the docs tree would be copied into itself
    // on every rebuild.
    if config.site_dir.starts_with(&config.docs_dir) {
        return Err(DocsmithError::Config(format!(
            "site_dir may not live inside docs_dir ({})",
            config.site_dir.display()
        ))
        .into());
    }

    if config.dev_addr.parse::<SocketAddr>().is_err() {
        return Err(DocsmithError::Config(format!(
            "invalid dev_addr '{}', expected IP:PORT",
            config.dev_addr
        ))
        .into());
    }

    Ok(())
}
