use crate::config::LoggingConfig;

/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` takes precedence over the configured level. The default output
/// is compact with uptime timestamps; `format = "json"` switches to one JSON
/// object per event.
///
/// ```bash
/// RUST_LOG=debug cargo run                       # everything
/// RUST_LOG=cart_store::actors=debug cargo run    # just the cart actor
/// ```
pub fn setup_tracing(config: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .compact()
            .init(),
    }
}
