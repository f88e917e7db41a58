use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a binary.
///
/// `RUST_LOG` wins when set; otherwise the library and the calling binary log at `level`.
pub fn init_tracing(binary_target: &str, level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},{}={level}",
                env!("CARGO_PKG_NAME"),
                binary_target.replace('-', "_")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
