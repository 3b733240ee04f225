pub mod aggregator;
pub mod anomaly;
pub mod pipeline;

pub use aggregator::Aggregator;
pub use anomaly::compute_anomalies;
pub use pipeline::SeriesPipeline;
