use crate::config::Settings;
use crate::error::Result;
use crate::models::{SeriesReport, UsDate};
use crate::utils::constants::UNDEFINED_VALUE;
use std::fmt::Write as _;
use std::io::Write;

/// Formats a [`SeriesReport`] as plain text. Performs no computation.
///
/// Sections, in order: annual averages (ascending year), overall statistics,
/// seasonal averages (Spring, Summer, Autumn, Winter), anomalies (input order).
pub struct TextReporter {
    precision: usize,
    show_anomalies: bool,
}

impl TextReporter {
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            precision: settings.precision,
            show_anomalies: settings.show_anomalies,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_anomalies(mut self, show_anomalies: bool) -> Self {
        self.show_anomalies = show_anomalies;
        self
    }

    pub fn render(&self, report: &SeriesReport) -> String {
        let p = self.precision;
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Annual Averages:");
        for year in &report.yearly {
            let _ = writeln!(out, "Year {}: Annual Average = {:.p$}", year.year, year.mean);
        }

        let overall = &report.overall;
        let _ = writeln!(out, "\nOverall Statistics:");
        let _ = writeln!(
            out,
            "Records: {} ({} to {})",
            overall.count,
            UsDate(overall.first_date),
            UsDate(overall.last_date)
        );
        let _ = writeln!(out, "Minimum Value: {:.p$}", overall.min);
        let _ = writeln!(out, "Maximum Value: {:.p$}", overall.max);
        let _ = writeln!(out, "Overall Average: {:.p$}", overall.mean);

        let _ = writeln!(out, "\nSeasonal Averages:");
        for season in &report.seasonal {
            match season.mean {
                Some(mean) => {
                    let _ = writeln!(out, "{}: {:.p$}", season.season, mean);
                }
                None => {
                    let _ = writeln!(out, "{}: {}", season.season, UNDEFINED_VALUE);
                }
            }
        }

        if self.show_anomalies {
            let _ = writeln!(out, "\nAnomalies Relative to Overall Mean:");
            for anomaly in &report.anomalies {
                let _ = writeln!(out, "{}: {:.p$}", UsDate(anomaly.date), anomaly.anomaly);
            }
        }

        out
    }

    pub fn write_to<W: Write>(&self, report: &SeriesReport, mut writer: W) -> Result<()> {
        writer.write_all(self.render(report).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}
