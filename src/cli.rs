//! Command line arguments.

use crate::config::Config;
use crate::output::OutputFormat;
use crate::processing::{BitSplit, MaskPolicy};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "subnet-calculator")]
#[command(version)]
#[command(about = "IPv4 subnet calculator: network, broadcast, host range, class and bit split", long_about = None)]
pub struct Args {
    /// IPv4 address in dotted-decimal form, e.g. 192.168.1.10
    #[arg(required_unless_present = "file")]
    pub ip: Option<String>,

    /// Subnet mask in dotted-decimal form, e.g. 255.255.255.0
    #[arg(required_unless_present = "file")]
    pub mask: Option<String>,

    /// Read "<ip> <mask>" pairs, one per line, instead of positional arguments
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with_all = ["ip", "mask"])]
    pub file: Option<PathBuf>,

    /// Output format (text|csv|json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Non-contiguous masks (permit|reject)
    #[arg(long, value_name = "POLICY")]
    pub mask_policy: Option<MaskPolicy>,

    /// How the binary split sizes the network portion (classful|prefix)
    #[arg(long, value_name = "MODE")]
    pub bit_split: Option<BitSplit>,

    /// Disable coloured output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Args {
    /// Overlay flags given on the command line onto `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(policy) = self.mask_policy {
            config.options.mask_policy = policy;
        }
        if let Some(split) = self.bit_split {
            config.options.bit_split = split;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}
