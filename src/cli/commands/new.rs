use std::fs;
use std::path::Path;

use log::info;

use crate::cli::types::NewOptions;
use crate::utils::error::{BoxResult, DocsmithError};

const CONFIG_TEMPLATE: &str = "site_name: My Docs\n";

const INDEX_TEMPLATE: &str = "\
# Welcome

This is the front page of your documentation.

## Getting started

Add markdown pages to the docs directory to grow your site, then run
`docsmith build` to produce the site directory.
";

/// Handle the 'new' command to create a fresh documentation project
pub fn handle_new_command(options: &NewOptions) -> BoxResult<()> {
    let path = &options.path;

    if path.exists() {
        let is_empty = path
            .read_dir()
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);

        if !is_empty && !options.force {
            return Err(DocsmithError::Generic(format!(
                "directory '{}' already exists and is not empty, use --force to scaffold anyway",
                path.display()
            ))
            .into());
        }
    }

    create_project_scaffold(path)?;

    info!("New documentation project created at {}", path.display());
    info!("Run 'docsmith build' inside it to build the site");

    Ok(())
}

/// Create the skeleton files and directories, leaving existing files alone
fn create_project_scaffold(project_path: &Path) -> BoxResult<()> {
    let docs_dir = project_path.join("docs");
    fs::create_dir_all(&docs_dir)?;
    info!("Created directory: {}", docs_dir.display());

    let config_path = project_path.join("docsmith.yml");
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
        info!("Created config file: {}", config_path.display());
    }

    let index_path = docs_dir.join("index.md");
    if !index_path.exists() {
        fs::write(&index_path, INDEX_TEMPLATE)?;
        info!("Created index page: {}", index_path.display());
    }

    Ok(())
}
