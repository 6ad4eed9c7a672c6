//! Protein name and activation-state labels derived from file paths.
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;

/// Activation state of the sampled structure, read off the file name.
///
/// Names carry an `_a` (active) or `_i` (inactive) marker by convention.
/// A name with neither marker, or with both, is `Unknown` rather than
/// being forced into one of the binary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Classification {
    Active,
    Inactive,
    Unknown,
}

/// Extract the protein identifier from a file path: the last path segment
/// with everything from the first `.` onward stripped.
pub fn protein_name(path: &Path) -> String {
    let file_name = path.file_name().and_then(OsStr::to_str).unwrap_or("");
    file_name.split('.').next().unwrap_or("").to_string()
}

/// Classify a structure from the markers in its file name.
pub fn classification(path: &Path) -> Classification {
    let name = protein_name(path);
    match (name.contains("_a"), name.contains("_i")) {
        (true, false) => Classification::Active,
        (false, true) => Classification::Inactive,
        _ => Classification::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_protein_name() {
        assert_eq!(protein_name(Path::new("/data/ras/kras_a.pdb")), "kras_a");
        assert_eq!(protein_name(Path::new("hras_i.pdb.gz")), "hras_i");
        assert_eq!(protein_name(Path::new("")), "");
    }

    #[test]
    fn test_classification_tri_state() {
        assert_eq!(
            classification(Path::new("/data/kras_a.pdb")),
            Classification::Active
        );
        assert_eq!(
            classification(Path::new("/data/kras_i.pdb")),
            Classification::Inactive
        );
        assert_eq!(
            classification(Path::new("/data/kras.pdb")),
            Classification::Unknown
        );
        // Both markers present is ambiguous, not first-match-wins.
        assert_eq!(
            classification(Path::new("/data/kras_a_i.pdb")),
            Classification::Unknown
        );
    }
}
