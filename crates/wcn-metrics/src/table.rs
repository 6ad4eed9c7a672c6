//! The column-oriented table accumulated over a run.
use crate::error::{ExtractError, Result};
use crate::extract::Classification;
use crate::metrics::Metric;
use crate::stats::Operator;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Wide table keyed by protein file: two leading columns (`name`,
/// `classification`) plus one f64 column per metric x operator pair.
///
/// Rows are pushed whole, so every column stays aligned: after N files
/// each column holds exactly N entries. One table is built per run and
/// handed through the pipeline; nothing is accumulated in static state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    names: Vec<String>,
    classifications: Vec<Classification>,
    columns: Vec<MetricColumn>,
}

impl MetricTable {
    /// Create an empty table with one column per metric x operator pair,
    /// in `Metric::iter()` (outer) x `Operator::iter()` (inner) order.
    pub fn new() -> Self {
        let columns = Metric::iter()
            .flat_map(|metric| {
                Operator::iter().map(move |op| MetricColumn {
                    name: format!("{}_{}", metric.display_name(), op.column_suffix()),
                    values: Vec::new(),
                })
            })
            .collect();
        MetricTable {
            names: Vec::new(),
            classifications: Vec::new(),
            columns,
        }
    }

    /// Append one complete row. `row` must hold one scalar per metric
    /// column, in the table's column order.
    pub fn push_row(
        &mut self,
        name: String,
        classification: Classification,
        row: &[f64],
    ) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ExtractError::Table(format!(
                "row for {} has {} values, table has {} metric columns",
                name,
                row.len(),
                self.columns.len()
            )));
        }
        self.names.push(name);
        self.classifications.push(classification);
        for (column, &value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        Ok(())
    }

    /// Number of rows (processed files).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Every column, the name/label columns included, has exactly `len()`
    /// entries.
    pub fn is_well_formed(&self) -> bool {
        let rows = self.names.len();
        self.classifications.len() == rows
            && self.columns.iter().all(|c| c.values.len() == rows)
    }
}

impl Default for MetricTable {
    fn default() -> Self {
        Self::new()
    }
}
