//! Running one or many calculations into a sink.

use crate::error::SubnetError;
use crate::output::ReportSink;
use crate::processing::{calculate_with, CalcOptions};
use colored::Colorize;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Counts of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub calculated: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Split a batch line into `(ip, mask)`.
///
/// Fields are separated by whitespace or commas. Blank lines and `#` comments
/// give `None`. A line without a mask yields an empty mask, extra fields are
/// kept in the mask so the calculation reports them.
pub fn split_pair(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
        .collect();
    let ip = fields.first().copied().unwrap_or_default().to_string();
    let mask = fields.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
    Some((ip, mask))
}

/// Calculate one pair and write it to `sink`.
///
/// Input errors go to `errors` as a user message and are counted; output
/// errors are returned.
pub fn run_pair(
    ip: &str,
    mask: &str,
    options: &CalcOptions,
    sink: &mut dyn ReportSink,
    errors: &mut dyn Write,
    summary: &mut RunSummary,
) -> Result<(), SubnetError> {
    match calculate_with(ip, mask, options) {
        Ok(report) => {
            sink.write_report(&report)?;
            summary.calculated += 1;
            Ok(())
        }
        Err(e) if e.is_input_error() => {
            log::warn!("{failed} {ip} {mask}: {e}", failed = "failed".on_red());
            writeln!(errors, "{} ({e})", e.user_message())?;
            summary.failed += 1;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Calculate every pair read from `reader`.
///
/// A bad line is reported and skipped; the rest of the batch still runs.
/// Bytes that are not UTF-8 are replaced, so such a line fails validation
/// like any other malformed input.
pub fn run_batch<R: BufRead>(
    mut reader: R,
    options: &CalcOptions,
    sink: &mut dyn ReportSink,
    errors: &mut dyn Write,
) -> Result<RunSummary, SubnetError> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::debug!("line {line_no} is not valid UTF-8");
        }
        let Some((ip, mask)) = split_pair(&line) else {
            log::trace!("skip line {line_no}");
            continue;
        };
        log::debug!("line {line_no}: {ip} {mask}");
        run_pair(&ip, &mask, options, sink, errors, &mut summary)?;
    }
    sink.finish()?;
    log::info!(
        "batch done: {} calculated, {} failed",
        summary.calculated,
        summary.failed
    );
    Ok(summary)
}
