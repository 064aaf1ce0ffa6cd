//! Telemetry helpers for applications embedding `plot-print`.
//!
//! The print pass emits `tracing` events (`debug` per pass, `trace` per
//! region). Hosts either call `init_default_tracing` or install their own
//! subscriber.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG` when the
/// `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plot_print=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
