use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes stdout plus dated-file logging.
///
/// The file `steamsweep_<date>.log` in the working directory keeps one
/// durable line per discovered and removed file. Returns the appender
/// guard; the caller holds it until the end of the run so the file is
/// flushed on exit.
pub fn init() -> impl Drop {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_name = format!("steamsweep_{}.log", chrono::Local::now().format("%Y-%m-%d"));
    let file_appender = tracing_appender::rolling::never(".", log_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .without_time(),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    guard
}
