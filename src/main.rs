// Module declarations
mod builder;
mod cli;
mod config;
mod deploy;
mod structure;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
