//! Opt-in file logging.
//!
//! Stdout belongs to the TUI, so nothing is logged unless `CUSTOM_ALERT_LOG`
//! names a file. `RUST_LOG` selects the filter, `info` when unset.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the log file path.
pub const LOG_ENV_VAR: &str = "CUSTOM_ALERT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Per-run log file: `{base}.{unix_secs}.{pid}`.
pub fn log_file_path(base: &str, started: SystemTime, pid: u32) -> PathBuf {
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    PathBuf::from(format!("{base}.{secs}.{pid}"))
}

/// Install the file subscriber when `CUSTOM_ALERT_LOG` is set.
///
/// Returns the file being written, or `None` when logging stays off.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_ENV_VAR).ok()?;
    let path = log_file_path(&base, SystemTime::now(), std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn path_carries_start_time_and_pid() {
        let started = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(
            log_file_path("/tmp/alert.log", started, 42),
            PathBuf::from("/tmp/alert.log.1700000000.42")
        );
    }

    #[test]
    fn clock_before_epoch_falls_back_to_zero() {
        let started = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(
            log_file_path("run", started, 7),
            PathBuf::from("run.0.7")
        );
    }
}
