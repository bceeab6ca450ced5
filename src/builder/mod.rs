use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::utils::error::{BoxResult, DocsmithError};

/// Counters for a completed site build
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Markdown pages found in the docs tree
    pub pages: usize,
    /// Every other file, carried through as a static asset
    pub assets: usize,
    pub elapsed: Duration,
}

/// Build the site by mirroring the docs tree into the site directory.
///
/// Markdown pages are carried through verbatim for the page renderer;
/// everything else is treated as a static asset. In dirty mode only files
/// newer than their existing copy are written and stale output is left in
/// place.
pub fn build_site(config: &Config, dirty: bool) -> BoxResult<BuildStats> {
    let started = Instant::now();

    if !config.docs_dir.is_dir() {
        return Err(DocsmithError::Build(format!(
            "docs directory not found: {}",
            config.docs_dir.display()
        ))
        .into());
    }

    if dirty {
        warn!(
            "A dirty build may leave stale files in {}",
            config.site_dir.display()
        );
    } else {
        clean_site_dir(config)?;
    }
    fs::create_dir_all(&config.site_dir)?;

    let mut stats = BuildStats::default();
    for entry in WalkDir::new(&config.docs_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        let relative = source.strip_prefix(&config.docs_dir)?;
        let destination = config.site_dir.join(relative);

        if is_markdown(relative, &config.markdown_ext) {
            stats.pages += 1;
        } else {
            stats.assets += 1;
        }

        if dirty && !is_newer(source, &destination) {
            debug!("Skipping unchanged file {}", relative.display());
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &destination)?;
        debug!("Copied {}", relative.display());
    }

    if stats.pages == 0 {
        let message = format!("no markdown pages found in {}", config.docs_dir.display());
        if config.strict {
            return Err(DocsmithError::Build(message).into());
        }
        warn!("{}", message);
    }

    stats.elapsed = started.elapsed();
    Ok(stats)
}

/// Remove the previous build output
pub fn clean_site_dir(config: &Config) -> BoxResult<()> {
    let site_dir = &config.site_dir;
    if !site_dir.exists() {
        return Ok(());
    }
    if !site_dir.is_dir() {
        return Err(DocsmithError::Build(format!(
            "site_dir is not a directory: {}",
            site_dir.display()
        ))
        .into());
    }

    info!("Cleaning site directory: {}", site_dir.display());
    for entry in fs::read_dir(site_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}

fn is_markdown(path: &Path, markdown_ext: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| markdown_ext.iter().any(|known| known == &ext))
        .unwrap_or(false)
}

fn is_newer(source: &Path, destination: &Path) -> bool {
    let destination_mtime = match fs::metadata(destination).and_then(|m| m.modified()) {
        Ok(mtime) => mtime,
        Err(_) => return true,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(mtime) => mtime > destination_mtime,
        Err(_) => true,
    }
}
