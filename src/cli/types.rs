use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "docsmith")]
#[command(about = "Documentation site generator written in Rust", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Silence warnings and informational output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Enable verbose debugging output
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the documentation site
    #[command(alias = "b")]
    Build(BuildArgs),

    /// Resolve serve options and build the site for local preview
    #[command(alias = "s")]
    Serve(ServeArgs),

    /// Build and publish the site to a git branch
    #[command(alias = "gh-deploy")]
    Deploy(DeployArgs),

    /// Create a new documentation project skeleton
    #[command(alias = "n")]
    New(NewArgs),

    /// Print the table of contents outline for a heading-token file
    Toc(TocArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Remove old files from the site directory before building (default)
    #[arg(short, long, overrides_with = "dirty")]
    pub clean: bool,

    /// Only write files that changed since the last build
    #[arg(short, long)]
    pub dirty: bool,

    /// Custom configuration file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Abort the build when warnings occur
    #[arg(short, long)]
    pub strict: bool,

    /// Theme to hand to the page renderer
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Use directory-style URLs when rendering pages
    #[arg(long, overrides_with = "no_directory_urls")]
    pub use_directory_urls: bool,

    /// Use file-style URLs when rendering pages
    #[arg(long)]
    pub no_directory_urls: bool,

    /// Directory the built site is written to
    #[arg(long, value_name = "DIR")]
    pub site_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Resolve the raw flags into build options
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            dirty: self.dirty && !self.clean,
            config_file: self.config_file.clone(),
            overrides: ConfigOverrides {
                strict: flag_override(self.strict),
                theme: self.theme.clone(),
                use_directory_urls: tri_state(self.use_directory_urls, self.no_directory_urls),
                site_dir: self.site_dir.clone(),
                ..ConfigOverrides::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// IP address and port to serve documentation from
    #[arg(short = 'a', long, value_name = "IP:PORT")]
    pub dev_addr: Option<String>,

    /// Reload browsers on any change (default)
    #[arg(long, overrides_with_all = ["no_livereload", "dirtyreload"])]
    pub livereload: bool,

    /// Disable browser reloading
    #[arg(long, overrides_with = "dirtyreload")]
    pub no_livereload: bool,

    /// Only rebuild files that changed when reloading
    #[arg(long)]
    pub dirtyreload: bool,

    /// Rebuild when the theme changes as well
    #[arg(long)]
    pub watch_theme: bool,

    /// Custom configuration file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Abort the build when warnings occur
    #[arg(short, long)]
    pub strict: bool,

    /// Theme to hand to the page renderer
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Use directory-style URLs when rendering pages
    #[arg(long, overrides_with = "no_directory_urls")]
    pub use_directory_urls: bool,

    /// Use file-style URLs when rendering pages
    #[arg(long)]
    pub no_directory_urls: bool,
}

impl ServeArgs {
    /// Resolve the raw flags into serve options
    pub fn options(&self) -> ServeOptions {
        let livereload = if self.dirtyreload {
            LiveReloadMode::Dirty
        } else if self.no_livereload {
            LiveReloadMode::NoLiveReload
        } else {
            LiveReloadMode::LiveReload
        };

        ServeOptions {
            livereload,
            watch_theme: self.watch_theme,
            config_file: self.config_file.clone(),
            overrides: ConfigOverrides {
                strict: flag_override(self.strict),
                theme: self.theme.clone(),
                use_directory_urls: tri_state(self.use_directory_urls, self.no_directory_urls),
                dev_addr: self.dev_addr.clone(),
                ..ConfigOverrides::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Remove old files from the site directory before building (default)
    #[arg(short, long, overrides_with = "dirty")]
    pub clean: bool,

    /// Only write files that changed since the last build
    #[arg(short, long)]
    pub dirty: bool,

    /// Commit message for the deployment (generated when omitted)
    #[arg(short, long, value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Branch the built site is committed to
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub remote_branch: Option<String>,

    /// Git remote the deploy branch is pushed to
    #[arg(short = 'r', long, value_name = "REMOTE")]
    pub remote_name: Option<String>,

    /// Force push the deploy branch
    #[arg(long)]
    pub force: bool,

    /// Deploy even if the published site was built by a newer version
    #[arg(long)]
    pub ignore_version: bool,

    /// Custom configuration file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Abort the build when warnings occur
    #[arg(short, long)]
    pub strict: bool,

    /// Theme to hand to the page renderer
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Use directory-style URLs when rendering pages
    #[arg(long, overrides_with = "no_directory_urls")]
    pub use_directory_urls: bool,

    /// Use file-style URLs when rendering pages
    #[arg(long)]
    pub no_directory_urls: bool,

    /// Directory the built site is written to
    #[arg(long, value_name = "DIR")]
    pub site_dir: Option<PathBuf>,
}

impl DeployArgs {
    /// Resolve the raw flags into deploy options
    pub fn options(&self) -> DeployOptions {
        DeployOptions {
            dirty: self.dirty && !self.clean,
            message: self.message.clone(),
            force: self.force,
            ignore_version: self.ignore_version,
            config_file: self.config_file.clone(),
            overrides: ConfigOverrides {
                strict: flag_override(self.strict),
                theme: self.theme.clone(),
                use_directory_urls: tri_state(self.use_directory_urls, self.no_directory_urls),
                site_dir: self.site_dir.clone(),
                remote_branch: self.remote_branch.clone(),
                remote_name: self.remote_name.clone(),
                ..ConfigOverrides::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Directory the new project is created in
    pub path: PathBuf,

    /// Scaffold into an existing non-empty directory
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    /// Resolve the raw flags into new-project options
    pub fn options(&self) -> NewOptions {
        NewOptions {
            path: self.path.clone(),
            force: self.force,
        }
    }
}

#[derive(Args, Debug)]
pub struct TocArgs {
    /// Heading-token file (JSON or YAML) emitted by the document parser
    pub tokens_file: PathBuf,
}

impl TocArgs {
    /// Resolve the raw flags into toc options
    pub fn options(&self) -> TocOptions {
        TocOptions {
            tokens_file: self.tokens_file.clone(),
        }
    }
}

/// Resolved options for the build command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub dirty: bool,
    pub config_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// How the preview rebuild reacts to changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveReloadMode {
    LiveReload,
    NoLiveReload,
    Dirty,
}

/// Resolved options for the serve command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    pub livereload: LiveReloadMode,
    pub watch_theme: bool,
    pub config_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Resolved options for the deploy command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub dirty: bool,
    pub message: Option<String>,
    pub force: bool,
    pub ignore_version: bool,
    pub config_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Resolved options for the new command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOptions {
    pub path: PathBuf,
    pub force: bool,
}

/// Resolved options for the toc command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    pub tokens_file: PathBuf,
}

fn flag_override(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
