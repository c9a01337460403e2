//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, ensure};
use ndarray::Array2;
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReadOptions, DataType}};

use crate::{election::ElectionTable, types::DistrictId};

/// Reads a CSV file from `path` into a Polars DataFrame with every column as text.
/// Labels such as "007" or "12A" are kept verbatim.
pub(crate) fn read_csv(path: &Path, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(has_header)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Read an election table: column 0 holds district labels, `party_columns`
/// (default: every other column) hold raw vote counts.
///
/// Parties are labelled by header name, or by column position when the file has no header.
pub(crate) fn read_election(path: &Path, has_header: bool, party_columns: Option<&[usize]>) -> Result<ElectionTable> {
    let df = read_csv(path, has_header)?;
    ensure!(df.width() >= 2, "[io::csv::read] {} must have a district column and at least one vote column", path.display());

    let columns = df.get_columns();
    let districts = district_labels(&columns[0], path)?;

    let selected = party_columns.map(<[usize]>::to_vec).unwrap_or_else(|| (1..df.width()).collect());
    ensure!(!selected.is_empty(), "[io::csv::read] no party columns selected from {}", path.display());
    for &col in &selected {
        ensure!(col != 0, "[io::csv::read] column 0 holds district labels and cannot be a party");
        ensure!(col < df.width(), "[io::csv::read] party column {col} out of range, {} has {} columns", path.display(), df.width());
    }

    let parties = selected.iter()
        .map(|&col| if has_header { columns[col].name().to_string() } else { col.to_string() })
        .collect::<Vec<_>>();

    let mut votes = Array2::<f64>::zeros((df.height(), selected.len()));
    for (j, &col) in selected.iter().enumerate() {
        let values = columns[col].cast(&DataType::Float64)?;
        let values = values.f64()?;
        ensure!(
            values.null_count() == 0,
            "[io::csv::read] column {col} of {} has missing or non-numeric vote counts", path.display()
        );
        values.into_no_null_iter().enumerate().for_each(|(i, v)| votes[[i, j]] = v);
    }

    Ok(ElectionTable::new(districts, parties, votes)?)
}

/// Read the dual-graph edge list: two columns of district labels per row.
pub(crate) fn read_edges(path: &Path, has_header: bool) -> Result<Vec<(DistrictId, DistrictId)>> {
    let df = read_csv(path, has_header)?;
    ensure!(df.width() >= 2, "[io::csv::read] {} must have two columns of district labels", path.display());

    let columns = df.get_columns();
    let from = district_labels(&columns[0], path)?;
    let to = district_labels(&columns[1], path)?;

    Ok(from.into_iter().zip(to).collect())
}

fn district_labels(column: &Column, path: &Path) -> Result<Vec<DistrictId>> {
    let labels = column.str()?;
    ensure!(
        labels.null_count() == 0,
        "[io::csv::read] column '{}' of {} has missing district labels", column.name(), path.display()
    );
    Ok(labels.into_no_null_iter().map(DistrictId::new).collect())
}
