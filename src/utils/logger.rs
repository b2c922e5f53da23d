use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for binaries and tests.
///
/// Safe to call repeatedly; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(false)
            .try_init();
    });
}
