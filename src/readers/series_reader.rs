use crate::error::{ProcessingError, Result};
use crate::models::{Record, Season};
use crate::utils::constants::{DATE_SEPARATOR, DEFAULT_BUFFER_SIZE, DEFAULT_DELIMITER};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const HEADER_LINES: u64 = 1;

/// Reads a two-column `date,value` series. The first line is always a header.
pub struct SeriesReader {
    delimiter: u8,
}

impl SeriesReader {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every record from a file. The handle is closed on return, including on error.
    pub fn read_path(&self, path: &Path) -> Result<Vec<Record>> {
        let file = File::open(path)?;
        debug!(path = %path.display(), "reading series");
        self.read_from(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
    }

    pub fn read_from<R: Read>(&self, mut source: R) -> Result<Vec<Record>> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let text = decode_input(&bytes)?;
        self.read_str(&text)
    }

    pub fn read_str(&self, text: &str) -> Result<Vec<Record>> {
        // The header is the first physical line, even when it is blank.
        let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .from_reader(body.as_bytes());

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line() + HEADER_LINES).unwrap_or(0);
            records.push(self.parse_row(&row, line)?);
        }

        debug!(records = records.len(), "parsed series");
        Ok(records)
    }

    fn parse_row(&self, row: &StringRecord, line: u64) -> Result<Record> {
        let content = || {
            let delimiter = (self.delimiter as char).to_string();
            row.iter().collect::<Vec<_>>().join(delimiter.as_str())
        };

        if row.len() != 2 {
            return Err(ProcessingError::parse(
                line,
                content(),
                format!("expected 2 fields, found {}", row.len()),
            ));
        }

        let date = parse_date(&row[0]).map_err(|e| match e {
            DateError::Month(month) => ProcessingError::MalformedSeason {
                month,
                context: format!("line {} ({:?})", line, content()),
            },
            DateError::Invalid(reason) => ProcessingError::parse(line, content(), reason),
        })?;

        let value = row[1].parse::<f64>().map_err(|_| {
            ProcessingError::parse(line, content(), format!("value '{}' is not numeric", &row[1]))
        })?;

        if !value.is_finite() {
            return Err(ProcessingError::parse(
                line,
                content(),
                format!("value '{}' is not a finite number", &row[1]),
            ));
        }

        Ok(Record::new(date, value))
    }
}

impl Default for SeriesReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq)]
enum DateError {
    Month(u32),
    Invalid(String),
}

/// Parse `M/D/YYYY`. Padded components are accepted too.
fn parse_date(field: &str) -> std::result::Result<NaiveDate, DateError> {
    let invalid = || DateError::Invalid(format!("date '{}' is not in M/D/YYYY format", field));

    let parts: Vec<&str> = field.split(DATE_SEPARATOR).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return Err(invalid());
    }
    if parts[2].len() != 4 || parts[0].len() > 2 || parts[1].len() > 2 {
        return Err(invalid());
    }

    let month = parts[0].parse::<u32>().map_err(|_| invalid())?;
    let day = parts[1].parse::<u32>().map_err(|_| invalid())?;
    let year = parts[2].parse::<i32>().map_err(|_| invalid())?;

    if Season::from_month(month).is_err() {
        return Err(DateError::Month(month));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::Invalid(format!("date '{}' is not a calendar date", field)))
}

/// Decode raw input once. A byte order mark wins; otherwise UTF-8, falling back to Windows-1252.
pub fn decode_input(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            return Err(ProcessingError::InvalidFormat(format!(
                "input is not valid {}",
                encoding.name()
            )));
        }
        return Ok(text);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            debug!("input is not UTF-8, decoding as windows-1252");
            Ok(WINDOWS_1252.decode_without_bom_handling(bytes).0)
        }
    }
}
