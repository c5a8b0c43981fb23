//! Benchmark records as emitted by sel4bench in its "JSON OUTPUT" section.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One statistics entry of a benchmark ("Min", "Max", "Mean", ...).
///
/// Kept as raw JSON so that fields we don't look at survive unchanged
/// when a record gets written back out.
pub type ResultsEntry = Value;

/// A benchmark record. Only the name is required up front; everything else
/// (including "Results") is kept verbatim and checked once the record has
/// actually been selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "Benchmark")]
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BenchmarkRecord {
    /// Key used for matching against the requested set.
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn results(&self) -> Result<&[ResultsEntry]> {
        match self.fields.get("Results") {
            Some(Value::Array(results)) => Ok(results),
            Some(_) => Err(Error::InvalidField {
                benchmark: self.name.clone(),
                field: "Results",
            }),
            None => Err(Error::MissingField {
                benchmark: self.name.clone(),
                field: "Results",
            }),
        }
    }
}
