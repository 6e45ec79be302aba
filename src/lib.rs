pub mod commands;
pub mod error;
pub mod logic;
pub mod packages;

use tracing_subscriber::EnvFilter;

pub use error::{Error, Result};

// Log to stderr so stdout stays clean for output. RUST_LOG wins over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// Message printed when a command fails. Goes to stderr regardless of the log filter.
pub fn error_report(error: &Error) -> String {
    format!("error: {error}")
}

pub fn run(args: commands::Args) -> Result<()> {
    commands::execute(args)
}
