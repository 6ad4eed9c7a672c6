//! End-to-end coverage of the aggregation pipeline, once against fixed
//! metric arrays and once against real PDB fixtures on disk.
use std::fs;
use std::path::{Path, PathBuf};
use wcn_metrics::error::Result;
use wcn_metrics::{aggregate, export, Classification, ExtractError, MetricSource, MetricTable, StructuralRecord};

const EPS: f64 = 1e-9;

/// A metric provider with canned arrays, exercising the trait seam the
/// aggregator depends on.
struct FixedSource {
    scale: f64,
}

impl MetricSource for FixedSource {
    fn bfactors(&self) -> Result<Vec<f64>> {
        Ok(vec![1.0 * self.scale, 2.0 * self.scale, 3.0 * self.scale])
    }

    fn calpha_wcn(&self) -> Result<Vec<f64>> {
        Ok(vec![2.0 * self.scale, 4.0 * self.scale])
    }

    fn all_atom_wcn(&self) -> Result<Vec<f64>> {
        Ok(vec![-1.0 * self.scale, -2.0 * self.scale, -3.0 * self.scale])
    }

    fn residue_average_wcn(&self) -> Result<Vec<f64>> {
        Ok(vec![5.0 * self.scale])
    }
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

#[test]
fn end_to_end_with_fixed_metrics() {
    let paths = [PathBuf::from("prot1_a.pdb"), PathBuf::from("prot2_i.pdb")];
    let mut table = MetricTable::new();
    aggregate::run(
        &paths,
        |path| {
            let scale = if path == Path::new("prot1_a.pdb") { 1.0 } else { 2.0 };
            Ok(FixedSource { scale })
        },
        &mut table,
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.is_well_formed());
    assert_eq!(table.column_names().len(), 12);
    assert_eq!(table.names(), &["prot1_a", "prot2_i"]);
    assert_eq!(
        table.classifications(),
        &[Classification::Active, Classification::Inactive]
    );

    // Hand-computed means for the canned arrays (scale 1 then scale 2).
    let expect = |name: &str, row0: f64, row1: f64| {
        let col = table.column(name).unwrap();
        assert!((col[0] - row0).abs() < EPS, "{name} row 0: {}", col[0]);
        assert!((col[1] - row1).abs() < EPS, "{name} row 1: {}", col[1]);
    };
    let geo_123 = 1.8171205928321397;
    let harm_123 = 1.6363636363636365;
    expect("BFactors_arithmetic_mean", 2.0, 4.0);
    expect("BFactors_geometric_mean", geo_123, 2.0 * geo_123);
    expect("BFactors_harmonic_mean", harm_123, 2.0 * harm_123);
    expect("CAlpha_arithmetic_mean", 3.0, 6.0);
    expect("CAlpha_geometric_mean", 8.0_f64.sqrt(), 32.0_f64.sqrt());
    expect("CAlpha_harmonic_mean", 8.0 / 3.0, 16.0 / 3.0);
    // The all-atom array is negative: abs-coerced means match [1,2,3],
    // the arithmetic mean keeps its sign.
    expect("AllAtom_arithmetic_mean", -2.0, -4.0);
    expect("AllAtom_geometric_mean", geo_123, 2.0 * geo_123);
    expect("AllAtom_harmonic_mean", harm_123, 2.0 * harm_123);
    expect("AveragePerResidue_arithmetic_mean", 5.0, 10.0);
    expect("AveragePerResidue_geometric_mean", 5.0, 10.0);
    expect("AveragePerResidue_harmonic_mean", 5.0, 10.0);
}

#[test]
fn failing_loader_aborts_the_run() {
    let paths = [PathBuf::from("broken_a.pdb")];
    let mut table = MetricTable::new();
    let err = aggregate::run(
        &paths,
        |path: &Path| -> Result<FixedSource> {
            Err(ExtractError::Parse {
                path: path.to_path_buf(),
                reason: "truncated".to_string(),
            })
        },
        &mut table,
    )
    .unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }));
    assert!(table.is_empty());
    assert!(table.is_well_formed());
}

#[test]
fn directory_run_over_real_fixtures() {
    // Stage the fixtures in a tempdir with a decoy that must be skipped.
    let dir = tempfile::tempdir().unwrap();
    for name in ["prot1_a.pdb", "prot2_i.pdb"] {
        fs::copy(fixture_dir().join(name), dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join("notes.txt"), b"not a structure").unwrap();

    let paths = aggregate::discover_structures(dir.path()).unwrap();
    assert_eq!(paths.len(), 2);

    let mut table = MetricTable::new();
    aggregate::run(&paths, |p| StructuralRecord::open(p), &mut table).unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.is_well_formed());
    assert_eq!(table.names(), &["prot1_a", "prot2_i"]);
    assert_eq!(
        table.classifications(),
        &[Classification::Active, Classification::Inactive]
    );

    // Fixture B-factors are uniform (10 and 20), so all three means agree.
    for suffix in ["arithmetic_mean", "geometric_mean", "harmonic_mean"] {
        let col = table.column(&format!("BFactors_{suffix}")).unwrap();
        assert!((col[0] - 10.0).abs() < EPS);
        assert!((col[1] - 20.0).abs() < EPS);
    }
    // Contact numbers are strictly positive for any multi-atom structure.
    for name in table.column_names() {
        let col = table.column(name).unwrap();
        assert!(col.iter().all(|v| v.is_finite() && *v > 0.0), "{name}");
    }

    // Persist and reload: byte-exact numeric round-trip.
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let pkl = out.join(export::PICKLE_FILE_NAME);
    export::write_pickle(&table, &pkl).unwrap();
    export::write_json(&table, &out.join(export::JSON_FILE_NAME)).unwrap();
    assert_eq!(export::read_pickle(&pkl).unwrap(), table);
}
