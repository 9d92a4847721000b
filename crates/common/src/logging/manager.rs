//! Logging initialization.

use tracing::{Level, Subscriber, info};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{layer, writer::BoxMakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use super::types::{FileLoggingConfig, LoggerConfig};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Filter applied to every layer. Defaults to INFO, overridable via `RUST_LOG`.
pub(crate) fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Builds an unfiltered layer writing to a rolling file.
pub(crate) fn file_layer<S>(config: &FileLoggingConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = RollingFileAppender::new(
        config.rotation.clone(),
        &config.directory,
        &config.file_name_prefix,
    );

    if config.json_format {
        layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false) // No color codes in files
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(file_appender)
            .with_ansi(false)
            .boxed()
    }
}

/// Initializes the global subscriber with the provided config.
///
/// # Panics
///
/// If a global subscriber was already installed.
pub fn init(config: LoggerConfig) {
    let filt = env_filter();

    let console = || {
        if config.stdout_config.use_stderr {
            BoxMakeWriter::new(std::io::stderr)
        } else {
            BoxMakeWriter::new(std::io::stdout)
        }
    };

    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(console())
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(console())
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    let file_sub = config
        .file_logging_config
        .as_ref()
        .map(|file_config| file_layer(file_config).with_filter(filt.clone()));

    // with() accepts Option<Layer>, so the file layer is simply skipped when unset
    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_sub)
        .init();

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );
}
