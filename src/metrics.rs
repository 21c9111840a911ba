use anyhow::Result;
use metrics::{counter, histogram};
use std::time::Duration;

use crate::models::Category;

/// Metrics collection and management
#[derive(Debug, Clone, Copy)]
pub struct MetricsCollector {
    // Engine metrics
    pub messages_categorized_total: &'static str,
    pub crisis_detections_total: &'static str,
    pub responses_total: &'static str,
    pub response_duration: &'static str,

    // Journal store metrics
    pub store_appends_total: &'static str,
    pub store_operation_duration: &'static str,

    // Error metrics
    pub errors_total: &'static str,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self {
            messages_categorized_total: "mindhelper_messages_categorized_total",
            crisis_detections_total: "mindhelper_crisis_detections_total",
            responses_total: "mindhelper_responses_total",
            response_duration: "mindhelper_response_duration_seconds",

            store_appends_total: "mindhelper_store_appends_total",
            store_operation_duration: "mindhelper_store_operation_duration_seconds",

            errors_total: "mindhelper_errors_total",
        }
    }
}

impl MetricsCollector {
    /// Initialize metrics collection
    pub fn init() -> Result<()> {
        // Initialize the metrics recorder
        metrics::set_global_recorder(metrics::NoopRecorder)
            .map_err(|e| anyhow::anyhow!("Failed to initialize metrics recorder: {}", e))?;

        Ok(())
    }

    /// Record a categorization outcome
    pub fn record_categorization(&self, category: Category) {
        counter!(self.messages_categorized_total, "category" => category.as_str()).increment(1);

        if category == Category::Suicidal {
            counter!(self.crisis_detections_total).increment(1);
        }
    }

    /// Record a completed response, with composition latency
    pub fn record_response(&self, category: Category, duration: Duration) {
        counter!(self.responses_total, "category" => category.as_str()).increment(1);
        histogram!(self.response_duration).record(duration.as_secs_f64());
    }

    /// Record a journal append
    pub fn record_store_append(&self, collection: &'static str, duration: Duration) {
        counter!(self.store_appends_total, "collection" => collection).increment(1);
        histogram!(self.store_operation_duration, "collection" => collection)
            .record(duration.as_secs_f64());
    }

    /// Record error metrics
    pub fn record_error(&self, error_type: &'static str, operation: &'static str) {
        counter!(self.errors_total, "type" => error_type, "operation" => operation).increment(1);
    }
}
