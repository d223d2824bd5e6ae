use clap::Parser;
use std::error::Error;
use subnet_calculator::cli::Args;
use subnet_calculator::config::Config;
use subnet_calculator::{logging, run};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = args.apply(Config::from_env()?);
    logging::init(&config.log_config)?;
    if !config.color {
        colored::control::set_override(false);
    }
    //
    log::info!("#Start main()");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = run(&args, &config, &mut stdout.lock(), &mut stderr.lock())?;

    log::info!(
        "#End main() calculated={} failed={}",
        summary.calculated,
        summary.failed
    );
    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
