//! CSV writing operations.

use std::io::Write;

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};

/// Write a DataFrame as CSV with a header row, optionally rounding floats.
pub(crate) fn write_csv<W: Write>(df: &mut DataFrame, writer: W, float_precision: Option<usize>) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .with_float_precision(float_precision)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV")
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame, float_precision: Option<usize>) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(df, &mut buffer, float_precision)?;
    String::from_utf8(buffer)
        .with_context(|| "[io::csv::write] CSV output is not valid UTF-8")
}
