//! Opt-in `tracing` subscriber for hosts that do not install their own.
//!
//! Events emitted by the engine, all with the `pass` field:
//!
//! - `debug` "render pass complete": `style`, `window_start`, `window_end`,
//!   `minimum`, `maximum` of the padded range, `destroyed` and `created`
//!   element counts.
//! - `debug` "chart cleared": `destroyed`.
//! - `trace` "releasing previous generation": `released`.
//! - `warn` "renderer failed to apply render pass": `error`.
//!
//! Use `RUST_LOG=window_graph=debug` to see one line per pass.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let first = init_default_tracing();
        assert!(!init_default_tracing());
        assert_eq!(first, cfg!(feature = "telemetry"));
    }
}
