use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,stripchart=debug";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the built-in filter when it is set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Like [`init`], but tolerates a subscriber that is already installed.
///
/// Handy in tests and demos where several entry points may race to set one up.
pub fn try_init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
