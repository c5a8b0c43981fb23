#[macro_use]
extern crate derive_builder;

#[macro_use]
extern crate serde_derive;

use anyhow::{Context as _, Result};
use tracing::level_filters::LevelFilter;

mod cli;
mod config;
mod error;
mod extract;
mod outfile;
mod pipeline;
mod record;
mod requested;
mod select;
mod summary;

use config::Config;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let result = try_main();
    match result {
        Err(e) => {
            eprintln!("benchparse: error: {e:#}");
            std::process::exit(1);
        }
        Ok(code) => std::process::exit(code),
    };
}

fn try_main() -> Result<i32> {
    let matches = cli::clap().get_matches();

    init_logging(matches.get_count("verbose"));

    let config = Config::from_matches(&matches).context("collecting arguments")?;
    tracing::debug!("{config:?}");

    let report = pipeline::run(&config).with_context(|| {
        format!(
            "summarizing \"{}\" for benchmarks in \"{}\"",
            config.bench_output, config.benchmarks
        )
    })?;

    if !config.quiet {
        println!("{}", report.text);
    }

    tracing::info!(
        "wrote {} benchmark(s) to {} and {}",
        report.benchmarks.len(),
        report.json_file(),
        report.text_file()
    );

    Ok(0)
}
