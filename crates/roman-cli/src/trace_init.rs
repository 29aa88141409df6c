use std::path::Path;

#[cfg(feature = "trace")]
pub type TraceGuard = tracing_appender::non_blocking::WorkerGuard;
#[cfg(not(feature = "trace"))]
pub type TraceGuard = ();

/// Write JSONL traces of every conversion into `log_dir`.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, "romantool-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roman_core=debug")),
        )
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}
