//! Histogram sample recording.
//!
//! A [`Histogram`] binds a metric name to a [bin mapping][samplog_binning::BinMapping] and
//! forwards one count-increment event per recorded sample to a [`StatsWriter`]. The recorder
//! itself holds no aggregation state: it only computes which bin a sample belongs to and
//! hands the event off.
#![deny(warnings)]
#![deny(missing_docs)]

mod id;
pub use self::id::MetricId;

mod writer;
pub use self::writer::{StatsWriter, TracingWriter};

mod histogram;
pub use self::histogram::Histogram;
