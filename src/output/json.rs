//! JSON lines output.

use super::ReportSink;
use crate::error::SubnetError;
use crate::models::SubnetReport;
use std::io::Write;

/// Writes each report as a single-line JSON object.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> JsonSink<W> {
        JsonSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn write_report(&mut self, report: &SubnetReport) -> Result<(), SubnetError> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SubnetError> {
        self.out.flush()?;
        Ok(())
    }
}
