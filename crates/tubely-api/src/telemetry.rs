//! Tracing subscriber setup.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "tubely=debug,tower_http=debug";

/// Install the global subscriber. Console output is compact in development and
/// JSON in production. `RUST_LOG` overrides the default filter.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_telemetry(is_production: bool) {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
    };

    let result = if is_production {
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        let console_fmt = tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        );
        tracing_subscriber::registry()
            .with(filter())
            .with(console_fmt)
            .try_init()
    };

    if result.is_ok() {
        tracing::info!(is_production, "Tracing initialized");
    }
}
