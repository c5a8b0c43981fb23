use std::fmt;

use crate::error::{Error, Result};
use crate::record::ResultsEntry;
use crate::select::FilteredBenchmarks;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    pub samples: u64,
}

impl Summary {
    /// Builds the summary of `benchmark` from its first results entry.
    pub fn from_results(benchmark: &str, results: &[ResultsEntry]) -> Result<Summary> {
        let invalid = |field: &'static str| Error::InvalidField {
            benchmark: benchmark.to_string(),
            field,
        };
        let entry = results
            .first()
            .ok_or_else(|| Error::EmptyResults {
                benchmark: benchmark.to_string(),
            })?
            .as_object()
            .ok_or_else(|| invalid("Results"))?;

        let field = |field: &'static str| {
            entry.get(field).ok_or_else(|| Error::MissingField {
                benchmark: benchmark.to_string(),
                field,
            })
        };
        let stat = |name: &'static str| -> Result<f64> {
            field(name)?.as_f64().ok_or_else(|| invalid(name))
        };

        Ok(Summary {
            min: stat("Min")?,
            max: stat("Max")?,
            mean: stat("Mean")?,
            stddev: stat("Stddev")?,
            samples: field("Samples")?
                .as_u64()
                .ok_or_else(|| invalid("Samples"))?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min: {:.2}", self.min)?;
        writeln!(f, "Max: {:.2}", self.max)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        writeln!(f, "StdDev: {:.2}", self.stddev)?;
        writeln!(f, "Samples: {}", self.samples)
    }
}

/// Renders one block per benchmark, each followed by an empty line.
pub fn render(benchmarks: &FilteredBenchmarks) -> Result<String> {
    let mut out = String::new();
    for (name, results) in benchmarks {
        let summary = Summary::from_results(name, results)?;
        out.push_str(&format!("{name}:\n{summary}\n"));
    }
    Ok(out)
}
