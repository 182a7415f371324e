//! Histogram recorder.

use samplog_binning::BinMapping;
use tracing::debug;

use crate::{MetricId, StatsWriter};

/// A histogram metric recorder.
///
/// Binds a metric name to a bin mapping and forwards one count-increment event per recorded
/// sample to the configured stats writer. Recording is stateless: the recorder holds no
/// aggregation state, so concurrent calls to [`record`](Self::record) need no external
/// synchronization as long as the writer is itself safe to share.
pub struct Histogram<B, W> {
    metric_id: MetricId,
    bins: B,
    writer: W,
}

impl<B, W> Histogram<B, W>
where
    B: BinMapping,
    W: StatsWriter,
{
    /// Creates a histogram recorder for the given metric name.
    ///
    /// The name is hashed to its stable identifier up front. Construction itself cannot
    /// fail: a name that is unknown downstream simply results in its events being discarded
    /// by the writer's catalog.
    pub fn new(metric_name: &str, bins: B, writer: W) -> Self {
        let metric_id = MetricId::from_name(metric_name);
        debug!(%metric_id, metric_name, bin_count = bins.bin_count(), "Created histogram recorder.");

        Self { metric_id, bins, writer }
    }

    /// Returns the stable identifier of the metric this recorder logs to.
    pub fn metric_id(&self) -> MetricId {
        self.metric_id
    }

    /// Returns a reference to the bin mapping used by this recorder.
    pub fn bins(&self) -> &B {
        &self.bins
    }

    /// Records a single sample.
    ///
    /// Resolves the sample's bin index and forwards a `(metric_id, count = 1, bin_index)`
    /// event to the stats writer. This never fails: every sample, including `NaN` and the
    /// infinities, resolves to some valid bin per the bin mapping's contract.
    pub fn record(&self, sample: f64) {
        let bin_index = self.bins.bin_index(sample);
        self.writer.write_histogram_sample(self.metric_id, 1, bin_index);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use samplog_binning::UniformBins;

    use super::*;

    #[derive(Default)]
    struct CaptureWriter {
        events: Mutex<Vec<(MetricId, u32, u32)>>,
    }

    impl StatsWriter for CaptureWriter {
        fn write_histogram_sample(&self, metric_id: MetricId, count: u32, bin_index: u32) {
            self.events.lock().unwrap().push((metric_id, count, bin_index));
        }
    }

    #[test]
    fn test_record_forwards_single_event() {
        let writer = CaptureWriter::default();
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();
        let histogram = Histogram::new("test.metric", bins, &writer);

        histogram.record(5.5);

        let events = writer.events.lock().unwrap();
        assert_eq!(events.as_slice(), &[(MetricId::from_name("test.metric"), 1, 6)]);
    }

    #[test]
    fn test_record_never_fails_on_degenerate_samples() {
        let writer = CaptureWriter::default();
        let bins = UniformBins::new(10, 0.0, 10.0).unwrap();
        let histogram = Histogram::new("test.metric", bins, &writer);

        histogram.record(f64::NAN);
        histogram.record(f64::INFINITY);
        histogram.record(f64::NEG_INFINITY);

        let events = writer.events.lock().unwrap();
        let indexes = events.iter().map(|(_, _, index)| *index).collect::<Vec<_>>();
        assert_eq!(indexes, vec![11, 11, 0]);
    }
}
