//! Directory discovery and the file x metric x operator aggregation loop.
use crate::error::{ExtractError, Result};
use crate::extract;
use crate::metrics::{Metric, MetricSource};
use crate::stats::Operator;
use crate::table::MetricTable;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

const STRUCTURE_SUFFIXES: [&str; 4] = [".pdb", ".cif", ".pdb.gz", ".cif.gz"];

fn is_structure_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| {
            let name = name.to_ascii_lowercase();
            STRUCTURE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
        .unwrap_or(false)
}

/// List the structural files in `dir`, sorted by path so a run produces
/// the same row order on every filesystem.
pub fn discover_structures(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::Input(format!(
            "{} is not a readable directory",
            dir.display()
        )));
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_structure_file(&path) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(ExtractError::Input(format!(
            "no structural files (.pdb/.cif) found in {}",
            dir.display()
        )));
    }
    paths.sort();
    Ok(paths)
}

/// Process every path into `table`: load a record, derive its name and
/// classification, then reduce each metric with each operator.
///
/// Each metric array is computed once per file and shared by all three
/// operators. Any failure aborts the run; the table never holds a
/// partial row.
pub fn run<S, F>(paths: &[PathBuf], loader: F, table: &mut MetricTable) -> Result<()>
where
    S: MetricSource,
    F: Fn(&Path) -> Result<S>,
{
    let column_count = Metric::iter().count() * Operator::iter().count();
    for path in paths {
        let name = extract::protein_name(path);
        let classification = extract::classification(path);
        println!("Processing {name}. Please wait...");
        log::info!("parsing {}", path.display());

        let record = loader(path)?;
        let mut row = Vec::with_capacity(column_count);
        for metric in Metric::iter() {
            let values = record.compute(metric)?;
            for op in Operator::iter() {
                row.push(op.apply(&values)?);
            }
        }
        table.push_row(name, classification, &row)?;
        log::info!("finished {} ({classification})", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_file_matching() {
        assert!(is_structure_file(Path::new("/data/kras_a.pdb")));
        assert!(is_structure_file(Path::new("/data/kras_a.PDB")));
        assert!(is_structure_file(Path::new("/data/kras_a.cif.gz")));
        assert!(!is_structure_file(Path::new("/data/notes.txt")));
        assert!(!is_structure_file(Path::new("/data/kras_a.pdb.bak")));
    }

    #[test]
    fn test_missing_directory_is_an_input_error() {
        let err = discover_structures(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, ExtractError::Input(_)));
    }

    #[test]
    fn test_empty_directory_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_structures(dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Input(_)));
    }

    #[test]
    fn test_discovery_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta_i.pdb", "alpha_a.pdb", "mid_a.cif", "skip.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let paths = discover_structures(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["alpha_a.pdb", "mid_a.cif", "zeta_i.pdb"]);
    }
}
