//! CSV output formatting for subnet reports.

use super::ReportSink;
use crate::error::SubnetError;
use crate::models::SubnetReport;
use std::io::Write;

const HEADER: [&str; 16] = [
    "ip_address",
    "subnet_mask",
    "cidr",
    "network",
    "broadcast",
    "usable_range",
    "total_hosts",
    "usable_hosts",
    "mask_binary",
    "class",
    "wildcard",
    "type",
    "contiguous_mask",
    "network_bits",
    "subnet_bits",
    "host_bits",
];

/// Quote a field, doubling any quotes inside it.
///
/// Every field is quoted so excel keeps the bit strings as text.
fn csv_field<T: ToString>(value: T) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    format!("\"{escaped}\"")
}

/// Writes a header line followed by one row per report.
pub struct CsvSink<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> CsvSink<W> {
        CsvSink {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> Result<(), SubnetError> {
        if !self.header_written {
            let header: Vec<String> = HEADER.iter().map(csv_field).collect();
            writeln!(self.out, "{}", header.join(","))?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_report(&mut self, report: &SubnetReport) -> Result<(), SubnetError> {
        self.write_header()?;
        let row = [
            csv_field(report.address),
            csv_field(report.mask),
            csv_field(report.cidr),
            csv_field(report.network),
            csv_field(report.broadcast),
            csv_field(report.usable_range),
            csv_field(report.total_hosts),
            csv_field(report.usable_hosts),
            csv_field(&report.mask_binary),
            csv_field(report.class),
            csv_field(report.wildcard),
            csv_field(report.address_type),
            csv_field(report.contiguous_mask),
            csv_field(&report.bits.network),
            csv_field(&report.bits.subnet),
            csv_field(&report.bits.host),
        ];
        log::trace!("csv row for {}", report.address);
        writeln!(self.out, "{}", row.join(","))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SubnetError> {
        // header even when every input failed
        self.write_header()?;
        self.out.flush()?;
        Ok(())
    }
}
