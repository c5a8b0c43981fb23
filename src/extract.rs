//! Locates and parses the machine readable part of a sel4bench log.
//!
//! sel4bench prints human readable progress, then a line containing only
//! `JSON OUTPUT`, then a single line holding a JSON array of benchmark
//! records that is terminated by the literal `END JSON OUTPUT`.

use camino::Utf8Path;
use thiserror::Error;

use crate::error::{self, Result};
use crate::record::BenchmarkRecord;

pub const SENTINEL: &str = "JSON OUTPUT";
pub const END_SENTINEL: &str = "END JSON OUTPUT";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no \"JSON OUTPUT\" line")]
    NoSentinel,
    #[error("\"JSON OUTPUT\" on line {0} is not followed by any data")]
    NoPayload(usize),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Returns the 1-based line number of the sentinel and the line after it.
fn find_payload(text: &str) -> Result<(usize, &str), ExtractError> {
    let mut lines = text.lines().enumerate();
    let (sentinel_idx, _) = lines
        .by_ref()
        .find(|(_, line)| line.trim() == SENTINEL)
        .ok_or(ExtractError::NoSentinel)?;

    match lines.next() {
        Some((_, payload)) => Ok((sentinel_idx + 1, payload)),
        None => Err(ExtractError::NoPayload(sentinel_idx + 1)),
    }
}

pub fn extract_records(text: &str) -> Result<Vec<BenchmarkRecord>, ExtractError> {
    let (lineno, payload) = find_payload(text)?;
    tracing::debug!("found \"{SENTINEL}\" on line {lineno}");

    let payload = payload.replace(END_SENTINEL, "");
    Ok(serde_json::from_str(&payload)?)
}

pub fn load_records(path: &Utf8Path) -> Result<Vec<BenchmarkRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| error::Error::file_not_found(path, e))?;

    extract_records(&text).map_err(|e| match e {
        ExtractError::Json(source) => error::Error::MalformedJson {
            path: path.to_owned(),
            source,
        },
        other => {
            tracing::debug!("{path}: {other}");
            error::Error::MalformedInput {
                path: path.to_owned(),
            }
        }
    })
}
