//! Inkstream CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use inkstream_cli::{
    Args,
    error_adapter::{is_warning, to_reports},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Inkstream");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = inkstream_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        for report in to_reports(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &*report)
                .expect("Writing to String buffer is infallible");

            if is_warning(&report) {
                warn!("{writer}");
            } else {
                error!("{writer}");
            }
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
