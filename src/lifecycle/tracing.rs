/// Initializes the tracing/logging infrastructure for the application.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity; `info` is used when it is unset:
/// - `RUST_LOG=info` - Actor lifecycle, created/updated/deleted entities
/// - `RUST_LOG=debug` - Also payloads, reads and lists
/// - `RUST_LOG=dish_orders=debug` - Debug only for this crate
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
