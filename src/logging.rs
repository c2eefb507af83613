use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when neither RUST_LOG nor a configured level is set
pub const DEFAULT_LEVEL: &str = "warn";

/// Install a stderr tracing subscriber.
///
/// `RUST_LOG` wins over `level`. Calling this more than once is a no-op.
pub fn init(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
