use std::sync::Mutex;

use samplog_recorder::{MetricId, StatsWriter};

/// Captures every sample event written to it, for asserting recorder output.
#[derive(Default)]
pub struct CapturingWriter {
    events: Mutex<Vec<(MetricId, u32, u32)>>,
}

impl CapturingWriter {
    pub fn events(&self) -> Vec<(MetricId, u32, u32)> {
        self.events.lock().unwrap().clone()
    }
}

impl StatsWriter for CapturingWriter {
    fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32) {
        self.events.lock().unwrap().push((metric_id, count, bin_index));
    }
}
