use super::config::SessionConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// CART_LOG=cart_widget::session=debug cargo run
/// ```
pub fn setup_tracing(config: &SessionConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
