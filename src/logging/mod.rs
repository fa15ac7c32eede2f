// Logging module for structured logging using the tracing crate

use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for structured logging.
///
/// The subscriber is configured with:
/// - Compact human-readable formatting (this is an interactive batch tool)
/// - Level filtering from `RUST_LOG`, defaulting to INFO
/// - Output to stderr so stdout stays clean for shell pipelines
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Examples
///
/// ```
/// use bannersmith::logging::init_subscriber;
///
/// // Initialize logging at application startup
/// init_subscriber().expect("Failed to initialize logging");
///
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process; keep this
    // in one test so the second call exercises the error path.
    #[test]
    fn test_init_subscriber_once_then_rejects() {
        assert!(init_subscriber().is_ok());
        assert!(init_subscriber().is_err());
    }
}
