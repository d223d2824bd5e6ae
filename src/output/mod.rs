//! Output formatting for subnet reports.
//!
//! Everything that writes a [`SubnetReport`] goes through [`ReportSink`], so
//! the calculator never touches stdout itself:
//! - [`terminal`] - labelled lines with a coloured bit split
//! - [`csv`] - one quoted CSV row per report
//! - [`json`] - one JSON object per line

mod csv;
mod json;
mod terminal;

use crate::error::SubnetError;
use crate::models::SubnetReport;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use csv::CsvSink;
pub use json::JsonSink;
pub use terminal::TerminalSink;

/// Destination for calculated reports.
pub trait ReportSink {
    fn write_report(&mut self, report: &SubnetReport) -> Result<(), SubnetError>;

    /// Flush anything buffered once all reports are written.
    fn finish(&mut self) -> Result<(), SubnetError> {
        Ok(())
    }
}

/// Output format selected on the command line or in the environment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<OutputFormat, SubnetError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "terminal" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(SubnetError::Config(format!(
                "unknown output format {other:?}, expected text, csv or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Build the sink for `format` writing to `out`.
pub fn make_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    out: W,
    color: bool,
) -> Box<dyn ReportSink + 'a> {
    log::debug!("output format={format} color={color}");
    match format {
        OutputFormat::Text => Box::new(TerminalSink::new(out, color)),
        OutputFormat::Csv => Box::new(CsvSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_make_sink_writes_each_format() {
        let report = calculate("192.168.1.10", "255.255.255.0").unwrap();
        for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json] {
            let mut buf = Vec::new();
            {
                let mut sink = make_sink(format, &mut buf, false);
                sink.write_report(&report).unwrap();
                sink.finish().unwrap();
            }
            let text = String::from_utf8(buf).unwrap();
            assert!(text.contains("192.168.1.255"), "{format}: {text}");
        }
    }
}
