pub mod text_report;

pub use text_report::TextReporter;
