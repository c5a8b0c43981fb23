use camino::Utf8Path;
use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Lowercased, trimmed benchmark names the user asked for.
pub type RequestedSet = IndexSet<String>;

pub fn parse_requested(text: &str) -> RequestedSet {
    // blank lines end up as "" in the set, same as the python tool did
    text.lines().map(|line| line.trim().to_lowercase()).collect()
}

pub fn load_requested(path: &Utf8Path) -> Result<RequestedSet> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::file_not_found(path, e))?;
    Ok(parse_requested(&text))
}
