use std::collections::BTreeMap;

use crate::models::{Record, Season};

/// All records of one calendar year, in the order they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub records: Vec<Record>,
}

impl YearGroup {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            records: Vec::new(),
        }
    }

    pub fn mean(&self) -> Option<f64> {
        let mut mean = RunningMean::default();
        for record in &self.records {
            mean.add(record.value);
        }
        mean.mean()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Incremental arithmetic mean that stays finite for any finite inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    mean: f64,
    count: usize,
}

impl RunningMean {
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        let n = self.count as f64;
        // Both terms are bounded by f64::MAX / n, so the step cannot overflow.
        self.mean += value / n - self.mean / n;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}

/// Season accumulators indexed by [`Season::index`]; every season is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonTotals {
    totals: [RunningMean; 4],
}

impl SeasonTotals {
    pub fn add(&mut self, season: Season, value: f64) {
        self.totals[season.index()].add(value);
    }

    pub fn get(&self, season: Season) -> &RunningMean {
        &self.totals[season.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, &RunningMean)> {
        Season::ALL.iter().map(move |s| (*s, &self.totals[s.index()]))
    }

    pub fn total_count(&self) -> usize {
        self.totals.iter().map(|t| t.count()).sum()
    }
}

/// Output of the aggregation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Year groups keyed by year, iterated in ascending order.
    pub years: BTreeMap<i32, YearGroup>,
    pub seasons: SeasonTotals,
}
