pub mod aggregates;
pub mod dataset;
pub mod record;
pub mod season;
pub mod statistics;

pub use aggregates::{Aggregates, RunningMean, SeasonTotals, YearGroup};
pub use dataset::Dataset;
pub use record::{Record, UsDate};
pub use season::Season;
pub use statistics::{Anomaly, OverallStats, SeasonAverage, SeriesReport, YearAverage};
