//! Telemetry helpers for applications embedding `bar-chart-rs`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! init helpers below or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "bar_chart_rs=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
