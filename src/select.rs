use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use clap::builder::PossibleValue;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::record::{BenchmarkRecord, ResultsEntry};
use crate::requested::RequestedSet;

/// Selected benchmarks, in input order, by their original-case name.
pub type FilteredBenchmarks = IndexMap<String, Vec<ResultsEntry>>;

/// How matched records are laid out in the JSON output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonLayout {
    /// One pretty-printed object per record, back to back.
    #[default]
    Concat,
    /// A single pretty-printed array holding all records.
    Array,
}

impl clap::ValueEnum for JsonLayout {
    fn value_variants<'a>() -> &'a [Self] {
        &[JsonLayout::Concat, JsonLayout::Array]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            JsonLayout::Concat => {
                PossibleValue::new("concat").help("one object per benchmark, not wrapped")
            }
            JsonLayout::Array => PossibleValue::new("array").help("a single JSON array"),
        })
    }
}

/// Returns all records whose lowercased name is requested, in input order.
pub fn filter_records<'a>(
    requested: &RequestedSet,
    records: &'a [BenchmarkRecord],
) -> Vec<&'a BenchmarkRecord> {
    records
        .iter()
        .filter(|record| {
            let selected = requested.contains(&record.match_key());
            tracing::debug!(
                "{} {}",
                if selected { "selecting" } else { "dropping" },
                record.name
            );
            selected
        })
        .collect()
}

/// Maps benchmark name to its results. A name that shows up twice keeps
/// its first position but takes the later results.
///
/// Fails if a selected record has no "Results" array.
pub fn to_benchmarks(selected: &[&BenchmarkRecord]) -> Result<FilteredBenchmarks> {
    let mut benchmarks = FilteredBenchmarks::new();
    for record in selected {
        benchmarks.insert(record.name.clone(), record.results()?.to_vec());
    }
    Ok(benchmarks)
}

/// Pretty printer with 4 space indent that writes non-ASCII characters as
/// `\uXXXX` escapes (UTF-16, lowercase hex).
struct AsciiPretty<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> io::Result<()> {
    let formatter = AsciiPretty(PrettyFormatter::with_indent(b"    "));
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

pub fn write_records(
    path: &Utf8Path,
    selected: &[&BenchmarkRecord],
    layout: JsonLayout,
) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match layout {
        JsonLayout::Concat => {
            for record in selected {
                write_pretty(&mut writer, record).map_err(|e| Error::io(path, e))?;
            }
        }
        JsonLayout::Array => {
            write_pretty(&mut writer, selected).map_err(|e| Error::io(path, e))?;
        }
    }

    writer.flush().map_err(|e| Error::io(path, e))
}
