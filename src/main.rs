use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use via2yolo::{convert, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.images.exists() {
        error!(
            "The specified images folder does not exist: {}",
            args.images.display()
        );
        return ExitCode::FAILURE;
    }
    if !args.json.exists() {
        error!(
            "The specified annotation file does not exist: {}",
            args.json.display()
        );
        return ExitCode::FAILURE;
    }

    info!("Label index: {:?}", args.labels);
    info!("Starting the conversion process...");

    match convert(
        &args.json,
        &args.images,
        &args.dest,
        &args.attribute,
        &args.labels,
    ) {
        Ok(stats) => {
            stats.print_summary();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
