use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file when `--log-file` is not given.
pub const LOG_ENV: &str = "TERMFOLIO_LOG";

/// Initialize file-only tracing.
///
/// The terminal belongs to the TUI, so logging stays off unless a path comes
/// from `--log-file` or `TERMFOLIO_LOG`. The file is named
/// `{path}.{timestamp}.{pid}` so concurrent instances never share one.
///
/// Returns the file actually written to.
pub fn init_tracing(explicit: Option<&Path>) -> Option<PathBuf> {
    let base = match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(std::env::var_os(LOG_ENV)?),
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = PathBuf::from(format!("{}.{}.{}", base.display(), timestamp, pid));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}
