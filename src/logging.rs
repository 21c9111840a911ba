use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize structured logging system.
///
/// Returns the file appender guard when a log file is configured; the
/// caller must keep it alive for buffered log lines to be flushed.
pub fn init_logging(log_level: Option<&str>, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Set up environment filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            let level = log_level.unwrap_or("info");
            EnvFilter::try_new(level)
        })
        .map_err(|e| anyhow::anyhow!("Failed to create log filter: {}", e))?;

    // Create registry
    let registry = Registry::default().with(env_filter);

    // Add console layer
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    // Add file layer if log file is specified
    let guard = if let Some(log_path) = log_file {
        let file_appender = rolling::daily(log_path.parent().unwrap_or(Path::new(".")), "mindhelper.log");
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_appender)
            .with_ansi(false)
            .with_target(true)
            .json();

        registry.with(console_layer).with(file_layer).init();
        Some(guard)
    } else {
        registry.with(console_layer).init();
        None
    };

    info!("Logging system initialized");
    Ok(guard)
}

/// Performance timing utilities
pub struct OperationTimer {
    operation: String,
    start: std::time::Instant,
    finished: bool,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: std::time::Instant::now(),
            finished: false,
        }
    }

    pub fn finish(mut self) -> u128 {
        self.finished = true;
        let duration = self.start.elapsed().as_millis();
        tracing::info!(
            operation = %self.operation,
            duration_ms = duration,
            "Operation completed"
        );
        duration
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        if !self.finished && !std::thread::panicking() {
            let duration = self.start.elapsed().as_millis();
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration,
                "Operation finished"
            );
        }
    }
}
