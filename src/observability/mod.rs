//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → rotating JSON file
//! ```
//!
//! Traces are written to `~/.local/share/zellij/flashquiz/flashquiz-otlp.json`
//! (`/host/...` inside the sandbox) as one OTLP/JSON document per line. The
//! file rotates at 5 MB and keeps three timestamped backups. The filter comes
//! from the `trace_level` plugin option and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: OTLP JSON span exporter
//! - `file_writer`: size-rotating writer

pub mod exporter;
mod file_writer;
pub mod init;

pub use init::{init_tracing, trace_file_path};
