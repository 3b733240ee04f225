pub mod series_reader;

pub use series_reader::{decode_input, SeriesReader};
