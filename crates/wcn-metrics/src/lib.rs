//! # wcn-metrics
//!
//! Batch extraction of structural metrics from protein coordinate files.
//!
//! Every PDB/mmCIF file in a directory is parsed into a
//! [`StructuralRecord`], queried for a fixed set of per-atom/per-residue
//! metrics (B-factors and weighted contact numbers), and reduced with the
//! arithmetic, geometric, and harmonic means into one wide
//! [`MetricTable`] row per file, alongside a protein name and an
//! active/inactive/unknown label read off the file name. The finished
//! table is persisted as a pickle snapshot and a JSON document.
//!
//! ```no_run
//! use wcn_metrics::{aggregate, export, MetricTable, StructuralRecord};
//! use std::path::Path;
//!
//! fn main() -> Result<(), wcn_metrics::ExtractError> {
//!     let paths = aggregate::discover_structures(Path::new("pdbs"))?;
//!     let mut table = MetricTable::new();
//!     aggregate::run(&paths, |p| StructuralRecord::open(p), &mut table)?;
//!     export::write_pickle(&table, Path::new("out/wcn_metrics.pkl"))?;
//!     export::write_json(&table, Path::new("out/wcn_metrics.json"))?;
//!     Ok(())
//! }
//! ```
pub mod aggregate;
pub mod error;
pub mod export;
pub mod extract;
pub mod metrics;
pub mod record;
pub mod stats;
pub mod table;

pub use self::error::ExtractError;
pub use self::extract::Classification;
pub use self::metrics::{Metric, MetricSource};
pub use self::record::StructuralRecord;
pub use self::stats::Operator;
pub use self::table::MetricTable;
