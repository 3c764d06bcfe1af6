use tracing_subscriber::EnvFilter;

/// Initializes a `tracing_subscriber` using `SHOOTS3_LOG` first, then `RUST_LOG`, and stays silent when neither is set.
///
/// Logs go to stderr; stdout carries only the URL or notices meant for the user.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("SHOOTS3_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("off"))
}
