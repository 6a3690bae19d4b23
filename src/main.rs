use clap::Parser;
use img_tool::cli::Args;
use img_tool::constants::USAGE_LINE;
use img_tool::error::Result;
use img_tool::utils::app_banner;
use img_tool::{batch, logger, validate_options, RasterEngine};
use img_tool::{error, info, success};
use std::process::ExitCode;

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        println!("{}", USAGE_LINE);
        println!("Run with --help for the full list of options.");
        return ExitCode::SUCCESS;
    }

    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    info!("{}", app_banner());

    let config = validate_options(args)?;
    batch::run(&RasterEngine::new(), &config)?;

    success!("Optimization complete.");
    Ok(())
}
