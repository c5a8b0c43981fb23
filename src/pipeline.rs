use camino::{Utf8Path, Utf8PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::load_records;
use crate::outfile::allocate_prefix;
use crate::requested::{load_requested, RequestedSet};
use crate::select::{filter_records, to_benchmarks, write_records, FilteredBenchmarks};
use crate::summary;

/// Result of one run.
#[derive(Debug)]
pub struct Report {
    /// `<dir>/0<N>`, without extension
    pub prefix: Utf8PathBuf,
    pub benchmarks: FilteredBenchmarks,
    pub text: String,
}

impl Report {
    pub fn json_file(&self) -> Utf8PathBuf {
        self.prefix.with_extension("json")
    }

    pub fn text_file(&self) -> Utf8PathBuf {
        self.prefix.with_extension("txt")
    }
}

fn write_text(path: &Utf8Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Requested names without a selected benchmark. Blank allowlist lines are
/// not reported.
fn unmatched<'a>(requested: &'a RequestedSet, benchmarks: &FilteredBenchmarks) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|name| !name.is_empty())
        .filter(|name| !benchmarks.keys().any(|found| found.to_lowercase() == **name))
        .map(String::as_str)
        .collect()
}

pub fn run(config: &Config) -> Result<Report> {
    let requested = load_requested(&config.benchmarks)?;
    tracing::info!(
        "{} benchmark(s) requested in {}",
        requested.len(),
        config.benchmarks
    );

    let records = load_records(&config.bench_output)?;
    tracing::info!("{} benchmark(s) found in {}", records.len(), config.bench_output);

    let prefix = allocate_prefix(&config.output_dir)?;
    tracing::info!("writing output to {prefix}.{{json,txt}}");

    let selected = filter_records(&requested, &records);
    let benchmarks = to_benchmarks(&selected)?;
    write_records(&prefix.with_extension("json"), &selected, config.json_layout)?;

    for name in unmatched(&requested, &benchmarks) {
        tracing::warn!("requested benchmark \"{name}\" not found");
    }

    let report = Report {
        text: summary::render(&benchmarks)?,
        prefix,
        benchmarks,
    };
    write_text(&report.text_file(), &report.text)?;

    Ok(report)
}
