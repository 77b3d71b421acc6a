//! Tracing subscriber setup for the add-on.

use tracing_subscriber::EnvFilter;

use crate::config::AddonSettings;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` overrides the configured level. Returns `false` if a global
/// subscriber was already installed (the host's, or an earlier call's).
pub fn init(settings: &AddonSettings) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if settings.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
