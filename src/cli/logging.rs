use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level for the given output flags
pub fn log_level(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging for the CLI
pub fn init_logging(quiet: bool, verbose: bool) -> LevelFilter {
    let level = log_level(quiet, verbose);

    let _ = SimpleLogger::new().with_level(level).init();

    level
}
