use lifers::Result;
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber
///
/// Output goes to `log_file` when given, otherwise to stderr if `stderr` is
/// set. With neither, nothing is installed and events are dropped; the
/// interactive UI owns the terminal.
pub fn init(log_file: Option<&Path>, stderr: bool) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
