pub mod commands;
pub mod logging;
pub mod types;

use std::process;

use clap::Parser;
use log::error;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    logging::init_logging(cli.quiet, cli.verbose);

    let result = match &cli.command {
        types::Commands::Build(args) => commands::handle_build_command(&args.options()),
        types::Commands::Serve(args) => commands::handle_serve_command(&args.options()),
        types::Commands::Deploy(args) => commands::handle_deploy_command(&args.options()),
        types::Commands::New(args) => commands::handle_new_command(&args.options()),
        types::Commands::Toc(args) => commands::handle_toc_command(&args.options()),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
