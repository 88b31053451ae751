//! Telemetry helpers for hosts embedding `cell-charts`.
//!
//! Drawing utilities emit `tracing` events only; installing a subscriber is
//! left to the host. The helpers here are a convenience for demos and tests
//! when the `telemetry` feature is enabled.

/// Filter used by [`init_default_tracing`] when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_TRACING_FILTER`] when it is unset.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_FILTER)
}

/// Installs a compact subscriber. `RUST_LOG` wins over `fallback_filter`,
/// e.g. `"cell_charts=trace"` to see sizing and tooltip decisions.
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already set a global subscriber.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{init_default_tracing, init_tracing};

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_init_is_a_no_op_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing("cell_charts=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_tracing_init_reports_existing_subscriber() {
        let _ = init_tracing("cell_charts=trace");
        assert!(!init_default_tracing());
    }
}
