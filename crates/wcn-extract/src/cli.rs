use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Extract per-structure metric summaries from a directory of PDB/mmCIF
/// files into pickle and JSON tables.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the structural files to process
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory to write wcn_metrics.pkl and wcn_metrics.json into
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Ask on stdin for a directory, falling back to `default` on a blank
/// line. Used when a directory was not given on the command line.
pub fn prompt_directory(label: &str, default: &str) -> io::Result<PathBuf> {
    print!("{label} [{default}]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(PathBuf::from(default))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}
