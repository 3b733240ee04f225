use crate::error::{ProcessingError, Result};
use crate::models::{
    Aggregates, Dataset, OverallStats, Record, RunningMean, SeasonAverage, SeriesReport,
    YearAverage,
};
use crate::processors::anomaly::compute_anomalies;

pub struct SeriesAnalyzer;

impl SeriesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Min, max and mean over every record.
    pub fn overall(&self, records: &[Record]) -> Result<OverallStats> {
        let first = records.first().ok_or(ProcessingError::EmptyDataset)?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut running = RunningMean::default();
        let mut first_date = first.date;
        let mut last_date = first.date;

        for record in records {
            min = min.min(record.value);
            max = max.max(record.value);
            running.add(record.value);

            if record.date < first_date {
                first_date = record.date;
            }
            if record.date > last_date {
                last_date = record.date;
            }
        }

        // The running mean is a convex combination, so only the last ulp can stray.
        let mean = running.mean().unwrap_or(first.value).clamp(min, max);

        Ok(OverallStats {
            count: records.len(),
            min,
            max,
            mean,
            first_date,
            last_date,
        })
    }

    /// Per-year means, ascending by year.
    pub fn yearly(&self, aggregates: &Aggregates) -> Vec<YearAverage> {
        aggregates
            .years
            .values()
            .filter_map(|group| {
                group.mean().map(|mean| YearAverage {
                    year: group.year,
                    count: group.len(),
                    mean,
                })
            })
            .collect()
    }

    /// Per-season means for all four seasons in calendar order.
    pub fn seasonal(&self, aggregates: &Aggregates) -> Vec<SeasonAverage> {
        aggregates
            .seasons
            .iter()
            .map(|(season, acc)| SeasonAverage {
                season,
                count: acc.count(),
                mean: acc.mean(),
            })
            .collect()
    }

    pub fn report(&self, dataset: &Dataset) -> SeriesReport {
        SeriesReport {
            yearly: self.yearly(&dataset.aggregates),
            overall: dataset.overall,
            seasonal: self.seasonal(&dataset.aggregates),
            anomalies: compute_anomalies(&dataset.records, dataset.overall.mean),
        }
    }
}

impl Default for SeriesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;
    use crate::processors::Aggregator;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, value: f64) -> Record {
        Record::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), value)
    }

    #[test]
    fn test_overall_statistics() -> Result<()> {
        let records = vec![
            record(2020, 6, 1, 2.0),
            record(2019, 1, 1, -1.0),
            record(2020, 12, 31, 5.0),
        ];

        let stats = SeriesAnalyzer::new().overall(&records)?;
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 5.0);
        assert!((stats.mean - 2.0).abs() < 1e-12);
        assert_eq!(stats.first_date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(stats.last_date, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        Ok(())
    }

    #[test]
    fn test_empty_dataset() {
        let err = SeriesAnalyzer::new().overall(&[]).unwrap_err();
        assert!(matches!(err, ProcessingError::EmptyDataset));
    }

    #[test]
    fn test_single_record() -> Result<()> {
        let stats = SeriesAnalyzer::new().overall(&[record(2020, 4, 2, 0.1)])?;
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.1);
        assert_eq!(stats.mean, 0.1);
        Ok(())
    }

    #[test]
    fn test_means_near_f64_max_stay_finite() -> Result<()> {
        let records = vec![
            record(2020, 1, 1, 1e308),
            record(2020, 2, 1, 1e308),
            record(2020, 3, 1, -1e308),
        ];
        let aggregates = Aggregator::new().aggregate(&records)?;
        let analyzer = SeriesAnalyzer::new();
        let expected = 1e308 / 3.0;

        let overall = analyzer.overall(&records)?;
        assert!((overall.mean - expected).abs() <= 1e293);

        let yearly = analyzer.yearly(&aggregates);
        assert!((yearly[0].mean - expected).abs() <= 1e293);

        let seasonal = analyzer.seasonal(&aggregates);
        assert_eq!(seasonal[Season::Winter.index()].mean, Some(1e308));
        assert_eq!(seasonal[Season::Spring.index()].mean, Some(-1e308));
        Ok(())
    }

    #[test]
    fn test_yearly_and_seasonal_means() -> Result<()> {
        let records = vec![
            record(2020, 3, 1, 1.0),
            record(2020, 4, 1, 3.0),
            record(2021, 7, 1, 10.0),
        ];
        let aggregates = Aggregator::new().aggregate(&records)?;
        let analyzer = SeriesAnalyzer::new();

        let yearly = analyzer.yearly(&aggregates);
        assert_eq!(yearly.len(), 2);
        assert_eq!((yearly[0].year, yearly[0].mean), (2020, 2.0));
        assert_eq!((yearly[1].year, yearly[1].mean), (2021, 10.0));

        let seasonal = analyzer.seasonal(&aggregates);
        assert_eq!(seasonal.len(), 4);
        assert_eq!(seasonal[0].season, Season::Spring);
        assert_eq!(seasonal[0].mean, Some(2.0));
        assert_eq!(seasonal[1].mean, Some(10.0));
        assert_eq!(seasonal[2].mean, None);
        assert_eq!(seasonal[3].count, 0);
        Ok(())
    }
}
