//! Tracing initialization and subscriber setup.

use super::exporter::{OtlpFileExporter, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Location of the OTLP trace file inside the sandbox.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::data_dir().join("flashquiz-otlp.json")
}

/// Builds a tracer provider that exports every span to `file_path`.
///
/// Spans are exported synchronously as they close; the plugin has no runtime
/// for a batch processor.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let exporter = OtlpFileExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Installs the global subscriber: an `EnvFilter` from `config.trace_level`
/// plus an OpenTelemetry layer writing to [`trace_file_path`].
///
/// Observability is optional. If the data directory cannot be created, or a
/// subscriber is already installed (the worker shares the process), this is a
/// no-op.
///
/// # Example
///
/// ```rust,no_run
/// use flashquiz::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let trace_file = trace_file_path();
    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let tracer = create_tracer_provider(trace_file).tracer(SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
