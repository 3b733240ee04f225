use crate::analyzers::SeriesAnalyzer;
use crate::error::Result;
use crate::models::{Dataset, Record, SeriesReport};
use crate::processors::Aggregator;
use crate::readers::SeriesReader;
use crate::utils::progress::ProgressReporter;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read, aggregate and analyse one series. Holds no state between runs.
pub struct SeriesPipeline {
    reader: SeriesReader,
    aggregator: Aggregator,
    analyzer: SeriesAnalyzer,
}

impl SeriesPipeline {
    pub fn new() -> Self {
        Self::with_reader(SeriesReader::new())
    }

    pub fn with_reader(reader: SeriesReader) -> Self {
        Self {
            reader,
            aggregator: Aggregator::new(),
            analyzer: SeriesAnalyzer::new(),
        }
    }

    pub fn run_path(&self, path: &Path, progress: Option<&ProgressReporter>) -> Result<SeriesReport> {
        if let Some(p) = progress {
            p.set_message(&format!("Reading {}...", path.display()));
        }
        let records = self.reader.read_path(path)?;
        self.run_records(records, progress)
    }

    pub fn run_reader<R: Read>(&self, source: R) -> Result<SeriesReport> {
        let records = self.reader.read_from(source)?;
        self.run_records(records, None)
    }

    pub fn run_records(
        &self,
        records: Vec<Record>,
        progress: Option<&ProgressReporter>,
    ) -> Result<SeriesReport> {
        if let Some(p) = progress {
            p.set_message(&format!("Analysing {} records...", records.len()));
        }

        let dataset = self.build_dataset(records)?;
        let report = self.analyzer.report(&dataset);

        info!(
            records = dataset.len(),
            years = report.yearly.len(),
            mean = report.overall.mean,
            "series analysed"
        );

        Ok(report)
    }

    pub fn build_dataset(&self, records: Vec<Record>) -> Result<Dataset> {
        let aggregates = self.aggregator.aggregate(&records)?;
        let overall = self.analyzer.overall(&records)?;

        Ok(Dataset {
            records,
            aggregates,
            overall,
        })
    }
}

impl Default for SeriesPipeline {
    fn default() -> Self {
        Self::new()
    }
}
