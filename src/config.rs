//! Report settings layered from defaults, an optional settings file,
//! `SEASONAL_*` environment variables and command line flags.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::utils::constants::{DEFAULT_PRECISION, ENV_PREFIX};

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct Settings {
    #[validate(custom(function = "validate_delimiter"))]
    pub delimiter: char,

    #[validate(range(max = 12))]
    pub precision: usize,

    pub show_anomalies: bool,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub delimiter: Option<char>,
    pub precision: Option<usize>,
    pub hide_anomalies: bool,
}

impl Settings {
    pub fn load(file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("delimiter", ",")?
            .set_default("precision", DEFAULT_PRECISION as u64)?
            .set_default("show_anomalies", true)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("delimiter", overrides.delimiter.map(|c| c.to_string()))?
            .set_override_option("precision", overrides.precision.map(|p| p as u64))?;

        if overrides.hide_anomalies {
            builder = builder.set_override("show_anomalies", false)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Delimiter as a byte; validation guarantees it is ASCII.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: DEFAULT_PRECISION,
            show_anomalies: true,
        }
    }
}

fn validate_delimiter(delimiter: &char) -> std::result::Result<(), ValidationError> {
    let c = *delimiter;
    if !c.is_ascii() || c.is_ascii_digit() || matches!(c, '/' | '.' | '-' | '"' | '\n' | '\r') {
        let mut err = ValidationError::new("delimiter");
        err.message = Some(format!("'{}' cannot separate date and value fields", c.escape_default()).into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::io::Write;

    #[test]
    fn test_defaults() -> Result<()> {
        let settings = Settings::load(None, &SettingsOverrides::default())?;
        assert_eq!(settings.delimiter, ',');
        assert_eq!(settings.precision, DEFAULT_PRECISION);
        assert!(settings.show_anomalies);
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_file_then_overrides() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "delimiter = \";\"")?;
        writeln!(file, "precision = 1")?;

        let settings = Settings::load(Some(file.path()), &SettingsOverrides::default())?;
        assert_eq!(settings.delimiter, ';');
        assert_eq!(settings.precision, 1);

        let overrides = SettingsOverrides {
            precision: Some(5),
            hide_anomalies: true,
            ..Default::default()
        };
        let settings = Settings::load(Some(file.path()), &overrides)?;
        assert_eq!(settings.delimiter, ';');
        assert_eq!(settings.precision, 5);
        assert!(!settings.show_anomalies);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_values() {
        let overrides = SettingsOverrides {
            delimiter: Some('/'),
            ..Default::default()
        };
        let err = Settings::load(None, &overrides).unwrap_err();
        assert!(matches!(err, ProcessingError::Validation(_)));

        let overrides = SettingsOverrides {
            precision: Some(40),
            ..Default::default()
        };
        let err = Settings::load(None, &overrides).unwrap_err();
        assert!(matches!(err, ProcessingError::Validation(_)));
    }

    #[test]
    fn test_missing_settings_file() {
        let err = Settings::load(Some(Path::new("does-not-exist.toml")), &SettingsOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ProcessingError::Config(_)));
    }
}
