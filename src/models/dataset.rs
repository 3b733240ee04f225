use crate::models::{Aggregates, OverallStats, Record};

/// A parsed series with its derived aggregates. Lives for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub aggregates: Aggregates,
    pub overall: OverallStats,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }
}
