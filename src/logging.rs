//! File logging for host applications
//!
//! The library only emits `tracing` events. A UI host that wants them on disk
//! calls [`init`] once at startup and keeps the returned guard alive.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;

use crate::constants::LOG_FILE_NAME;

/// Install a global subscriber writing to `<dir>/music-catalog.log`.
///
/// Dropping the guard flushes and stops the background writer.
pub fn init(dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(dir.as_ref(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_log_file_once() {
        let dir = tempdir().unwrap();
        let guard = init(dir.path()).unwrap();
        tracing::info!("logging initialized");
        drop(guard);

        let content = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(content.contains("logging initialized"));

        // A second global subscriber is refused
        assert!(init(dir.path()).is_err());
    }
}
