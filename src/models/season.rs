use std::fmt;

use crate::error::{ProcessingError, Result};

/// Meteorological season (three calendar months each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Fixed calendar order used for reporting.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn from_month(month: u32) -> Result<Self> {
        match month {
            3..=5 => Ok(Season::Spring),
            6..=8 => Ok(Season::Summer),
            9..=11 => Ok(Season::Autumn),
            12 | 1 | 2 => Ok(Season::Winter),
            _ => Err(ProcessingError::MalformedSeason {
                month,
                context: "month must be between 1 and 12".to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Position in [`Season::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn months(&self) -> [u32; 3] {
        match self {
            Season::Spring => [3, 4, 5],
            Season::Summer => [6, 7, 8],
            Season::Autumn => [9, 10, 11],
            Season::Winter => [12, 1, 2],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
