use chrono::NaiveDate;

use crate::models::Season;

/// Statistics over every record, independent of grouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearAverage {
    pub year: i32,
    pub count: usize,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonAverage {
    pub season: Season,
    pub count: usize,
    /// `None` when the season has no records.
    pub mean: Option<f64>,
}

/// Deviation of one record from the overall mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anomaly {
    pub date: NaiveDate,
    pub anomaly: f64,
}

/// Everything the text report prints, already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    pub yearly: Vec<YearAverage>,
    pub overall: OverallStats,
    pub seasonal: Vec<SeasonAverage>,
    pub anomalies: Vec<Anomaly>,
}
