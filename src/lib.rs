// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! [`calculate`] turns an address and a dotted-decimal mask into a
//! [`models::SubnetReport`]; [`output`] sinks render reports for the binary.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use batch::RunSummary;
pub use error::SubnetError;
pub use processing::{calculate, calculate_with, BitSplit, CalcOptions, MaskPolicy};

use batch::{run_batch, run_pair};
use cli::Args;
use config::Config;
use output::make_sink;
use std::fs::File;
use std::io::{BufReader, Write};

/// Run the calculation(s) selected by `args`, writing reports to `out` and
/// input errors to `errors`.
pub fn run(
    args: &Args,
    config: &Config,
    out: &mut dyn Write,
    errors: &mut dyn Write,
) -> Result<RunSummary, SubnetError> {
    let mut sink = make_sink(config.format, out, config.color);

    if let Some(path) = &args.file {
        log::info!("reading address/mask pairs from {}", path.display());
        let file = File::open(path).map_err(|e| {
            log::error!("can not open {}: {e}", path.display());
            e
        })?;
        return run_batch(BufReader::new(file), &config.options, sink.as_mut(), errors);
    }

    let ip = args.ip.as_deref().unwrap_or_default();
    let mask = args.mask.as_deref().unwrap_or_default();
    let mut summary = RunSummary::default();
    run_pair(ip, mask, &config.options, sink.as_mut(), errors, &mut summary)?;
    sink.finish()?;
    Ok(summary)
}
