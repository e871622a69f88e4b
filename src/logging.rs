use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global log subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the built-in level, which is `warn`, or `debug` with
/// `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_level(true)
        .with_target(verbose)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
