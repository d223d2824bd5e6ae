//! log4rs setup.

use crate::error::SubnetError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Console appender on stderr at `warn`, used when no config file exists.
pub fn fallback_config() -> Result<Config, SubnetError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| SubnetError::Config(format!("log config: {e}")))
}

/// Initialise logging from `path`, or the stderr fallback if it is missing.
pub fn init(path: &str) -> Result<(), SubnetError> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| SubnetError::Config(format!("log config {path}: {e}")))?;
        log::debug!("logging configured from {path}");
    } else {
        log4rs::init_config(fallback_config()?)
            .map_err(|e| SubnetError::Config(format!("log init: {e}")))?;
        log::debug!("{path} not found, logging to stderr");
    }
    Ok(())
}
