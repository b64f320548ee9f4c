use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pms_tracker::config::Config;
use pms_tracker::output::format_summary;
use pms_tracker::{Cli, EntryCollector, Prompter, ReportExporter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "pms_tracker=debug"
    } else {
        "pms_tracker=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    let config = cli.apply(config);

    let mut prompter = Prompter::stdio();
    let days = match cli.days {
        Some(days) => days,
        None => prompter.prompt_count("How many days would you like to log? ")?,
    };

    let mut collector = EntryCollector::new(config.ratings);
    collector.collect(&mut prompter, days)?;

    let exporter = ReportExporter::new(config.report);
    let summary = exporter
        .export_default(&collector.to_table())
        .with_context(|| {
            format!(
                "could not write {}",
                exporter.config().output_file.display()
            )
        })?;

    let output = format_summary(&summary, collector.entries(), cli.format)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
