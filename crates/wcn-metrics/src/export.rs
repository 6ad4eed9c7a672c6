//! Persist the finished table as a pickle snapshot and a JSON document.
use crate::error::{ExtractError, Result};
use crate::table::MetricTable;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

pub const PICKLE_FILE_NAME: &str = "wcn_metrics.pkl";
pub const JSON_FILE_NAME: &str = "wcn_metrics.json";

/// Write `bytes` through a temp file in the destination directory and
/// rename into place, so a crash mid-write never leaves a torn artifact.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| ExtractError::Io(e.error))?;
    Ok(())
}

/// Binary snapshot. Pickle keeps the column dtypes exact and stays
/// loadable from Python for downstream analysis.
pub fn write_pickle(table: &MetricTable, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    serde_pickle::to_writer(&mut buf, table, serde_pickle::SerOptions::new())?;
    write_atomic(path, &buf)
}

/// Reload a pickle snapshot with full fidelity.
pub fn read_pickle(path: &Path) -> Result<MetricTable> {
    let file = File::open(path)?;
    let table = serde_pickle::from_reader(BufReader::new(file), serde_pickle::DeOptions::new())?;
    Ok(table)
}

/// Human-inspectable JSON rendering of the same table.
pub fn write_json(table: &MetricTable, path: &Path) -> Result<()> {
    let buf = serde_json::to_vec_pretty(table)?;
    write_atomic(path, &buf)
}
