//! Flat, column-wise view of one parsed structural file.
use crate::error::{ExtractError, Result};
use itertools::Itertools;
use pdbtbx::PDB;
use std::path::Path;

/// One parsed coordinate file, flattened into per-atom columns.
///
/// The pdbtbx API requires iterating PDB -> Chain -> Residue -> Atom; we
/// collect everything the metrics need in one pass and drop the parsed
/// hierarchy. `res_indices` numbers residues by order of appearance so
/// per-residue grouping does not depend on author-assigned residue ids.
#[derive(Debug)]
pub struct StructuralRecord {
    coords: Vec<[f64; 3]>,
    bfactors: Vec<f64>,
    atom_names: Vec<String>,
    res_indices: Vec<usize>,
    is_hetero: Vec<bool>,
}

impl StructuralRecord {
    pub fn new(
        coords: Vec<[f64; 3]>,
        bfactors: Vec<f64>,
        atom_names: Vec<String>,
        res_indices: Vec<usize>,
        is_hetero: Vec<bool>,
    ) -> Self {
        StructuralRecord {
            coords,
            bfactors,
            atom_names,
            res_indices,
            is_hetero,
        }
    }

    /// Parse a PDB/mmCIF file (gzipped variants included) into a record.
    ///
    /// A malformed file is a `Parse` error; the caller treats it as fatal
    /// for the whole run.
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| ExtractError::Input(format!("non-UTF-8 path: {}", path.display())))?;
        let (pdb, warnings) = pdbtbx::open(path_str).map_err(|errors| ExtractError::Parse {
            path: path.to_path_buf(),
            reason: errors.iter().map(|e| e.to_string()).join("; "),
        })?;
        for warning in warnings {
            log::debug!("{}: {}", path.display(), warning);
        }
        Ok(Self::from(&pdb))
    }

    pub fn size(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[[f64; 3]] {
        &self.coords
    }

    pub fn bfactor_column(&self) -> &[f64] {
        &self.bfactors
    }

    pub fn atom_names(&self) -> &[String] {
        &self.atom_names
    }

    pub fn res_indices(&self) -> &[usize] {
        &self.res_indices
    }

    pub fn is_hetero(&self) -> &[bool] {
        &self.is_hetero
    }
}

impl From<&PDB> for StructuralRecord {
    fn from(pdb: &PDB) -> Self {
        let (coords, bfactors, atom_names, res_indices, is_hetero): (
            Vec<[f64; 3]>,
            Vec<f64>,
            Vec<String>,
            Vec<usize>,
            Vec<bool>,
        ) = pdb
            .residues()
            .enumerate()
            .flat_map(|(res_index, residue)| {
                residue.atoms().map(move |atom| {
                    let (x, y, z) = atom.pos();
                    (
                        [x, y, z],
                        atom.b_factor(),
                        atom.name().to_string(),
                        res_index,
                        atom.hetero(),
                    )
                })
            })
            .multiunzip();

        StructuralRecord::new(coords, bfactors, atom_names, res_indices, is_hetero)
    }
}
