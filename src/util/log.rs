use anyhow::{anyhow, Result};
use tracing_subscriber::fmt::time::OffsetTime;

/// Installs a global `tracing` subscriber that writes to stderr.
///
/// The library itself only emits events (e.g. when a float comparison has to fall back to
/// [`f32::total_cmp`]); binaries and tests that want to see them call this once at startup.
///
/// # Errors
/// Fails if a global subscriber has already been installed in this process.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("setup_log(): could not install subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::setup_log;

    #[test]
    fn setup_log_only_once() {
        assert!(setup_log().is_ok());
        assert!(setup_log().is_err());
        tracing::warn!("logging installed for tests");
    }
}
