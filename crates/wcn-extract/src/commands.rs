use crate::cli::prompt_directory;
use std::fs;
use std::path::PathBuf;
use wcn_metrics::{aggregate, export, MetricTable, StructuralRecord};

/// Run the whole pipeline: discover structures, aggregate the metric
/// table, and persist both artifacts under one output directory.
pub fn extract(input: Option<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let input = match input {
        Some(dir) => dir,
        None => prompt_directory("Input directory", ".")?,
    };
    // The output directory is asked for once and reused for both files.
    let output = match output {
        Some(dir) => dir,
        None => prompt_directory("Output directory", ".")?,
    };

    let paths = aggregate::discover_structures(&input)?;
    log::info!(
        "discovered {} structures under {}",
        paths.len(),
        input.display()
    );
    println!(
        "Found {} structural files in {}. This can take a while on large structures.",
        paths.len(),
        input.display()
    );

    let mut table = MetricTable::new();
    aggregate::run(&paths, |p| StructuralRecord::open(p), &mut table)?;

    fs::create_dir_all(&output)?;
    let pickle_path = output.join(export::PICKLE_FILE_NAME);
    let json_path = output.join(export::JSON_FILE_NAME);
    export::write_pickle(&table, &pickle_path)?;
    export::write_json(&table, &json_path)?;

    println!(
        "Wrote {} rows x {} metric columns to {} and {}",
        table.len(),
        table.column_names().len(),
        pickle_path.display(),
        json_path.display()
    );
    Ok(())
}
