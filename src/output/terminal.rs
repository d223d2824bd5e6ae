//! Terminal output with colours.

use super::ReportSink;
use crate::error::SubnetError;
use crate::models::SubnetReport;
use crate::processing::format_in_blocks;
use colored::Colorize;
use std::io::Write;

/// Bits per display block in the binary split.
const BLOCK_SIZE: usize = 8;

/// Writes the report as labelled lines, one field per line.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
    written: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> TerminalSink<W> {
        TerminalSink {
            out,
            color,
            written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The three bit portions in 8-bit blocks, coloured red/yellow/green.
    fn bit_split(&self, report: &SubnetReport) -> String {
        let portions = [
            format_in_blocks(&report.bits.network, BLOCK_SIZE),
            format_in_blocks(&report.bits.subnet, BLOCK_SIZE),
            format_in_blocks(&report.bits.host, BLOCK_SIZE),
        ];
        if !self.color {
            return portions
                .iter()
                .filter(|p| !p.is_empty())
                .cloned()
                .collect::<Vec<String>>()
                .join(" | ");
        }
        let [network, subnet, host] = portions;
        [network.red(), subnet.yellow(), host.green()]
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl<W: Write> ReportSink for TerminalSink<W> {
    fn write_report(&mut self, report: &SubnetReport) -> Result<(), SubnetError> {
        if self.written > 0 {
            writeln!(self.out)?;
        }
        let out = &mut self.out;
        writeln!(out, "IP Address: {}  Subnet Mask: {}", report.address, report.mask)?;
        writeln!(out, "CIDR Notation: /{}", report.cidr)?;
        writeln!(out, "Network Address: {}", report.network)?;
        writeln!(out, "Broadcast Address: {}", report.broadcast)?;
        writeln!(out, "Usable IP Range: {}", report.usable_range)?;
        writeln!(out, "Total Hosts: {}", report.total_hosts)?;
        writeln!(out, "Usable Hosts: {}", report.usable_hosts)?;
        writeln!(out, "Subnet Mask Binary: {}", report.mask_binary)?;
        writeln!(out, "IP Class: {}", report.class)?;
        writeln!(out, "Wildcard Mask: {}", report.wildcard)?;
        writeln!(out, "IP Type: {}", report.address_type)?;
        let split = self.bit_split(report);
        let out = &mut self.out;
        writeln!(out, "IP Binary: {split}")?;
        if !report.contiguous_mask {
            let note = "mask is not contiguous, values above are not a real subnet";
            if self.color {
                writeln!(out, "{}: {note}", "NOTE".on_red())?;
            } else {
                writeln!(out, "NOTE: {note}")?;
            }
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SubnetError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    fn render(ip: &str, mask: &str) -> String {
        let report = calculate(ip, mask).unwrap();
        let mut sink = TerminalSink::new(Vec::new(), false);
        sink.write_report(&report).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_terminal_labels() {
        let text = render("192.168.1.10", "255.255.255.0");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "CIDR Notation: /24");
        assert_eq!(lines[2], "Network Address: 192.168.1.0");
        assert_eq!(lines[3], "Broadcast Address: 192.168.1.255");
        assert_eq!(lines[4], "Usable IP Range: 192.168.1.1 - 192.168.1.254");
        assert_eq!(lines[5], "Total Hosts: 256");
        assert_eq!(lines[6], "Usable Hosts: 254");
        assert_eq!(
            lines[7],
            "Subnet Mask Binary: 11111111.11111111.11111111.00000000"
        );
        assert_eq!(lines[8], "IP Class: C");
        assert_eq!(lines[9], "Wildcard Mask: 0.0.0.255");
        assert_eq!(lines[10], "IP Type: Private");
        assert_eq!(
            lines[11],
            "IP Binary: 11000000 10101000 00000001 | 00001010"
        );
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_terminal_no_usable_range() {
        let text = render("8.8.8.8", "255.255.255.255");
        assert!(text.contains("Usable IP Range: None (subnet too small)"));
        assert!(text.contains("Usable Hosts: 0"));
    }

    #[test]
    fn test_terminal_non_contiguous_note() {
        let text = render("10.1.2.3", "255.0.255.0");
        assert!(text.contains("NOTE: mask is not contiguous"));
    }

    #[test]
    fn test_terminal_separates_reports() {
        let mut sink = TerminalSink::new(Vec::new(), false);
        sink.write_report(&calculate("10.0.0.1", "255.0.0.0").unwrap())
            .unwrap();
        sink.write_report(&calculate("10.0.0.2", "255.0.0.0").unwrap())
            .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("\n\nIP Address: 10.0.0.2"));
    }
}
