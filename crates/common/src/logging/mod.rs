//! Logging subsystem.

pub mod manager;
pub mod types;


pub use manager::init;
// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};
