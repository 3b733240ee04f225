use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seasonal-series")]
#[command(about = "Annual, seasonal and anomaly statistics for a date/value series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a two-column date,value file (first line is a header)
    Analyze {
        #[arg(help = "Input file with M/D/YYYY dates and numeric values")]
        input: PathBuf,

        #[arg(short, long, help = "Field delimiter [default: ,]")]
        delimiter: Option<char>,

        #[arg(short, long, help = "Decimal places in the report [default: 3]")]
        precision: Option<usize>,

        #[arg(long, help = "Omit the per-record anomaly section")]
        no_anomalies: bool,

        #[arg(short, long, help = "Settings file (TOML, YAML or JSON)")]
        config: Option<PathBuf>,
    },
}
