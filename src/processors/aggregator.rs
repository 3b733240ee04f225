use crate::error::Result;
use crate::models::{Aggregates, Record, YearGroup};
use tracing::debug;

/// Groups records by calendar year and by season in a single pass.
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, records: &[Record]) -> Result<Aggregates> {
        let mut aggregates = Aggregates::default();

        for record in records {
            // Resolve the season first so a bad month never lands in a year group.
            let season = record.season()?;

            aggregates
                .years
                .entry(record.year())
                .or_insert_with(|| YearGroup::new(record.year()))
                .records
                .push(*record);
            aggregates.seasons.add(season, record.value);
        }

        debug!(
            years = aggregates.years.len(),
            records = aggregates.seasons.total_count(),
            "aggregated series"
        );

        Ok(aggregates)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
