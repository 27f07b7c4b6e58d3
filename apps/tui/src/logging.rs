use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "urbanpulse=warn";
const DEBUG_DIRECTIVE: &str = "urbanpulse=debug";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// The dashboard owns the terminal and no file was configured.
    Discard,
}

impl<'a> LogTarget<'a> {
    pub const fn select(interactive: bool, log_file: Option<&'a Path>) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }
}

/// `--debug` beats `RUST_LOG`; otherwise `RUST_LOG` beats the default.
fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_DIRECTIVE);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber writing to `target`.
pub fn init_logging(debug: bool, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(debug));

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    }
    .map_err(|e| eyre!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_forces_debug_level() {
        assert_eq!(env_filter(true).to_string(), DEBUG_DIRECTIVE);
    }

    #[test]
    fn dashboard_never_logs_to_the_terminal() {
        assert_eq!(LogTarget::select(true, None), LogTarget::Discard);
        assert_eq!(LogTarget::select(false, None), LogTarget::Stderr);

        let path = Path::new("urbanpulse.log");
        assert_eq!(LogTarget::select(true, Some(path)), LogTarget::File(path));
        assert_eq!(LogTarget::select(false, Some(path)), LogTarget::File(path));
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let path = Path::new("/nonexistent-dir/urbanpulse.log");
        assert!(init_logging(false, LogTarget::File(path)).is_err());
    }
}
