use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters accumulated across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    items_placed: u64,
    featured_placed: u64,
    invalidations: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, item_count: usize, featured_count: usize) {
        self.passes = self.passes.saturating_add(1);
        self.items_placed = self.items_placed.saturating_add(item_count as u64);
        self.featured_placed = self.featured_placed.saturating_add(featured_count as u64);
    }

    /// A signature mismatch forced a recompute.
    pub fn record_invalidation(&mut self) {
        self.invalidations = self.invalidations.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            passes: self.passes,
            items_placed: self.items_placed,
            featured_placed: self.featured_placed,
            invalidations: self.invalidations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub passes: u64,
    pub items_placed: u64,
    pub featured_placed: u64,
    pub invalidations: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("items_placed".to_string(), json!(self.items_placed));
        map.insert("featured_placed".to_string(), json!(self.featured_placed));
        map.insert("invalidations".to_string(), json!(self.invalidations));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_passes() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(12, 2);
        metrics.record_pass(12, 2);
        metrics.record_invalidation();

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.passes, 2);
        assert_eq!(snapshot.items_placed, 24);
        assert_eq!(snapshot.featured_placed, 4);
        assert_eq!(snapshot.invalidations, 1);
        assert_eq!(snapshot.uptime_ms, 1500);
    }

    #[test]
    fn snapshot_converts_to_log_event() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(3, 1);

        let event = metrics
            .snapshot(Duration::from_secs(2))
            .to_log_event("masonry::metrics");
        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields.get("passes"), Some(&json!(1)));
    }
}
