use crate::cli::args::{Cli, Commands};
use crate::config::{Settings, SettingsOverrides};
use crate::error::Result;
use crate::processors::SeriesPipeline;
use crate::readers::SeriesReader;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::TextReporter;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            delimiter,
            precision,
            no_anomalies,
            config,
        } => {
            let overrides = SettingsOverrides {
                delimiter,
                precision,
                hide_anomalies: no_anomalies,
            };
            let settings = Settings::load(config.as_deref(), &overrides)?;
            debug!(?settings, input = %input.display(), "starting analysis");

            let progress = ProgressReporter::new_spinner("Reading series...", cli.quiet);
            let pipeline =
                SeriesPipeline::with_reader(SeriesReader::with_delimiter(settings.delimiter_byte()));
            let report = pipeline.run_path(&input, Some(&progress))?;
            progress.clear();

            TextReporter::from_settings(&settings).write_to(&report, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
