//! Stats writer interface and built-in implementations.

use std::sync::Arc;

use tracing::trace;

use crate::MetricId;

/// Forwards histogram sample events to a metrics pipeline.
///
/// Implementations own the delivery side of recording: validating the metric identifier
/// against their catalog, batching and transmitting events, and their own thread safety.
/// Writes are fire-and-forget from the recorder's point of view: events for unrecognized
/// identifiers are silently discarded downstream, and no error ever surfaces to the caller.
pub trait StatsWriter {
    /// Writes a single histogram sample event: `count` new observations in bin `bin_index`
    /// of the histogram identified by `metric_id`.
    fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32);
}

impl<W> StatsWriter for &W
where
    W: StatsWriter + ?Sized,
{
    fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32) {
        (**self).write_histogram_sample(metric_id, count, bin_index)
    }
}

impl<W> StatsWriter for Arc<W>
where
    W: StatsWriter + ?Sized,
{
    fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32) {
        (**self).write_histogram_sample(metric_id, count, bin_index)
    }
}

/// A stats writer that emits each sample event as a `tracing` event.
///
/// Performs no batching and no catalog validation. Mostly useful for local debugging of
/// recorder wiring before pointing it at a real pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingWriter;

impl StatsWriter for TracingWriter {
    fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32) {
        trace!(%metric_id, count, bin_index, "Histogram sample recorded.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_writer_accepts_events_without_subscriber() {
        let writer = TracingWriter;
        writer.write_histogram_sample(MetricId::from_name("test.metric"), 1, 3);
    }
}
