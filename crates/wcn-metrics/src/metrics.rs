//! Named structural metrics and the weighted-contact-number provider.
use crate::error::{ExtractError, Result};
use crate::record::StructuralRecord;
use itertools::izip;
use strum::EnumIter;

/// The fixed metric set queried for every structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Metric {
    BFactors,
    CAlphaWcn,
    AllAtomWcn,
    ResidueAverageWcn,
}

impl Metric {
    /// Display name used as the column-name prefix. Kept as an explicit
    /// mapping rather than derived from the identifier text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::BFactors => "BFactors",
            Metric::CAlphaWcn => "CAlpha",
            Metric::AllAtomWcn => "AllAtom",
            Metric::ResidueAverageWcn => "AveragePerResidue",
        }
    }
}

/// Per-structure metric queries, each returning one numeric array.
///
/// This is the seam between the aggregation loop and the geometry code:
/// the aggregator only sees this trait, so alternative providers (or the
/// fixed-array sources used in tests) slot in without touching the loop.
pub trait MetricSource {
    /// Raw per-atom B-factor column.
    fn bfactors(&self) -> Result<Vec<f64>>;

    /// Weighted contact number over alpha carbons, one value per residue
    /// with a CA atom.
    fn calpha_wcn(&self) -> Result<Vec<f64>>;

    /// Weighted contact number over every polymer atom.
    fn all_atom_wcn(&self) -> Result<Vec<f64>>;

    /// All-atom weighted contact number averaged within each residue.
    fn residue_average_wcn(&self) -> Result<Vec<f64>>;

    fn compute(&self, metric: Metric) -> Result<Vec<f64>> {
        match metric {
            Metric::BFactors => self.bfactors(),
            Metric::CAlphaWcn => self.calpha_wcn(),
            Metric::AllAtomWcn => self.all_atom_wcn(),
            Metric::ResidueAverageWcn => self.residue_average_wcn(),
        }
    }
}

/// Weighted contact number: wcn_i = sum over j != i of 1 / r_ij^2.
/// Coincident atoms (altloc duplicates) are skipped rather than letting a
/// zero distance blow the sum up to infinity.
fn weighted_contact_number(coords: &[[f64; 3]]) -> Vec<f64> {
    let mut wcn = vec![0.0; coords.len()];
    for i in 0..coords.len() {
        for j in (i + 1)..coords.len() {
            let dx = coords[i][0] - coords[j][0];
            let dy = coords[i][1] - coords[j][1];
            let dz = coords[i][2] - coords[j][2];
            let d2 = dx * dx + dy * dy + dz * dz;
            if d2 == 0.0 {
                continue;
            }
            let w = 1.0 / d2;
            wcn[i] += w;
            wcn[j] += w;
        }
    }
    wcn
}

impl MetricSource for StructuralRecord {
    fn bfactors(&self) -> Result<Vec<f64>> {
        if self.is_empty() {
            return Err(ExtractError::EmptySelection("b-factor"));
        }
        Ok(self.bfactor_column().to_vec())
    }

    fn calpha_wcn(&self) -> Result<Vec<f64>> {
        let ca_coords: Vec<[f64; 3]> = izip!(self.coords(), self.atom_names(), self.is_hetero())
            .filter(|(_, name, &hetero)| name.as_str() == "CA" && !hetero)
            .map(|(coord, _, _)| *coord)
            .collect();
        if ca_coords.is_empty() {
            return Err(ExtractError::EmptySelection("alpha-carbon"));
        }
        Ok(weighted_contact_number(&ca_coords))
    }

    fn all_atom_wcn(&self) -> Result<Vec<f64>> {
        let polymer_coords: Vec<[f64; 3]> = izip!(self.coords(), self.is_hetero())
            .filter(|(_, &hetero)| !hetero)
            .map(|(coord, _)| *coord)
            .collect();
        if polymer_coords.is_empty() {
            return Err(ExtractError::EmptySelection("all-atom"));
        }
        Ok(weighted_contact_number(&polymer_coords))
    }

    fn residue_average_wcn(&self) -> Result<Vec<f64>> {
        let (polymer_coords, polymer_res): (Vec<[f64; 3]>, Vec<usize>) =
            izip!(self.coords(), self.res_indices(), self.is_hetero())
                .filter(|(_, _, &hetero)| !hetero)
                .map(|(coord, &res_index, _)| (*coord, res_index))
                .unzip();
        if polymer_coords.is_empty() {
            return Err(ExtractError::EmptySelection("all-atom"));
        }
        let wcn = weighted_contact_number(&polymer_coords);

        // Atoms arrive grouped by residue, so a single pass over the
        // (wcn, residue) pairs folds each group into its average.
        let mut averages = Vec::new();
        let mut current_res = polymer_res[0];
        let mut sum = 0.0;
        let mut count = 0usize;
        for (&w, &res_index) in izip!(&wcn, &polymer_res) {
            if res_index != current_res {
                averages.push(sum / count as f64);
                current_res = res_index;
                sum = 0.0;
                count = 0;
            }
            sum += w;
            count += 1;
        }
        averages.push(sum / count as f64);
        Ok(averages)
    }
}
