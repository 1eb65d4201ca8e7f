//! Shared helpers for the fpkit command-line tools

pub mod output;
pub mod render;

/// Initialize logging.
/// Default: no logs, so stdout stays clean JSON. Verbose: Info level.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
