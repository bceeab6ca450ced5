use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site title, shown by themes and recorded in scaffolded projects
    #[serde(default = "defaults::default_site_name")]
    pub site_name: String,

    /// Short description of the site
    #[serde(default)]
    pub site_description: Option<String>,

    /// Canonical URL the site will be published under
    #[serde(default)]
    pub site_url: Option<String>,

    /// Directory containing the documentation sources
    #[serde(default = "defaults::default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Directory the built site is written to
    #[serde(default = "defaults::default_site_dir")]
    pub site_dir: PathBuf,

    /// Theme handed to the page renderer
    #[serde(default = "defaults::default_theme")]
    pub theme: String,

    /// Use directory-style URLs (about/ instead of about.html)
    #[serde(default = "defaults::default_use_directory_urls")]
    pub use_directory_urls: bool,

    /// Treat build warnings as errors
    #[serde(default)]
    pub strict: bool,

    /// Address the development server binds to
    #[serde(default = "defaults::default_dev_addr")]
    pub dev_addr: String,

    /// Branch deployments are pushed to
    #[serde(default = "defaults::default_remote_branch")]
    pub remote_branch: String,

    /// Git remote deployments are pushed to
    #[serde(default = "defaults::default_remote_name")]
    pub remote_name: String,

    /// File extensions treated as markdown pages
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: Vec<String>,

    /// Custom user keys, passed through to the renderer untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_name: defaults::default_site_name(),
            site_description: None,
            site_url: None,
            docs_dir: defaults::default_docs_dir(),
            site_dir: defaults::default_site_dir(),
            theme: defaults::default_theme(),
            use_directory_urls: defaults::default_use_directory_urls(),
            strict: false,
            dev_addr: defaults::default_dev_addr(),
            remote_branch: defaults::default_remote_branch(),
            remote_name: defaults::default_remote_name(),
            markdown_ext: defaults::default_markdown_ext(),
            extra: HashMap::new(),
        }
    }
}

impl Config {
    /// Apply command line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(strict) = overrides.strict {
            self.strict = strict;
        }
        if let Some(theme) = &overrides.theme {
            self.theme = theme.clone();
        }
        if let Some(flag) = overrides.use_directory_urls {
            self.use_directory_urls = flag;
        }
        if let Some(dir) = &overrides.site_dir {
            self.site_dir = dir.clone();
        }
        if let Some(addr) = &overrides.dev_addr {
            self.dev_addr = addr.clone();
        }
        if let Some(branch) = &overrides.remote_branch {
            self.remote_branch = branch.clone();
        }
        if let Some(name) = &overrides.remote_name {
            self.remote_name = name.clone();
        }
    }
}

/// Command line overrides applied on top of the loaded configuration.
///
/// `None` fields leave the configuration file's value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub strict: Option<bool>,
    pub theme: Option<String>,
    pub use_directory_urls: Option<bool>,
    pub site_dir: Option<PathBuf>,
    pub dev_addr: Option<String>,
    pub remote_branch: Option<String>,
    pub remote_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.site_name, "My Docs");
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.site_dir, PathBuf::from("site"));
        assert_eq!(config.theme, "basic");
        assert!(config.use_directory_urls);
        assert!(!config.strict);
        assert_eq!(config.dev_addr, "127.0.0.1:8000");
        assert_eq!(config.remote_branch, "gh-pages");
        assert_eq!(config.remote_name, "origin");
        assert_eq!(config.markdown_ext, vec!["md", "markdown"]);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let mut config = Config::default();
        let overrides = ConfigOverrides {
            strict: Some(true),
            theme: Some("slate".to_string()),
            use_directory_urls: Some(false),
            site_dir: Some(PathBuf::from("public")),
            dev_addr: Some("0.0.0.0:80".to_string()),
            remote_branch: Some("pages".to_string()),
            remote_name: Some("upstream".to_string()),
        };

        config.apply_overrides(&overrides);

        assert!(config.strict);
        assert_eq!(config.theme, "slate");
        assert!(!config.use_directory_urls);
        assert_eq!(config.site_dir, PathBuf::from("public"));
        assert_eq!(config.dev_addr, "0.0.0.0:80");
        assert_eq!(config.remote_branch, "pages");
        assert_eq!(config.remote_name, "upstream");
    }

    #[test]
    fn test_empty_overrides_leave_config_untouched() {
        let mut config = Config::default();
        config.theme = "slate".to_string();

        config.apply_overrides(&ConfigOverrides::default());

        assert_eq!(config.theme, "slate");
        assert!(!config.strict);
    }
}
