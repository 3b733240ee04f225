use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::Result;
use crate::models::Season;

/// A single dated observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub value: f64,
}

impl Record {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn season(&self) -> Result<Season> {
        Season::from_month(self.month())
    }
}

/// Displays a date in the `M/D/YYYY` input format.
pub struct UsDate(pub NaiveDate);

impl fmt::Display for UsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.0.month(), self.0.day(), self.0.year())
    }
}
