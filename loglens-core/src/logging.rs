use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based
/// filtering (defaults to "info" when RUST_LOG is unset).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Json
    }
}

/// How report output is rendered: human tables or JSON lines for piping.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Json,
    Pretty,
}
