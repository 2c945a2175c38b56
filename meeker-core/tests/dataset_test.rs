//! Tests for the Dataset input contract and correlation precompute.

use proptest::prelude::*;

use meeker_core::{Dataset, MeekerError};

#[test]
fn rejects_empty_input() {
    assert!(matches!(
        Dataset::from_rows(vec![]),
        Err(MeekerError::InvalidDataset { .. })
    ));
    assert!(matches!(
        Dataset::from_rows(vec![vec![]]),
        Err(MeekerError::InvalidDataset { .. })
    ));
}

#[test]
fn rejects_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = Dataset::from_rows(vec![vec![1.0, bad]]);
        assert!(result.is_err(), "{bad} should be rejected");
    }
}

#[test]
fn shape_accessors() {
    let data = Dataset::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(data.rows(), 2);
    assert_eq!(data.cols(), 3);
    assert_eq!(data.get(1, 2), 6.0);
    assert_eq!(data.column(1), vec![2.0, 5.0]);
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let rows: Vec<Vec<f64>> = (0..20)
        .map(|i| {
            let t = i as f64;
            vec![t, 2.0 * t + ((i % 3) as f64), 10.0 - t]
        })
        .collect();
    let data = Dataset::from_rows(rows).unwrap();
    let corr = data.correlation_matrix();
    for i in 0..3 {
        assert!((corr[i][i] - 1.0).abs() < 1e-12);
        for j in 0..3 {
            assert!((corr[i][j] - corr[j][i]).abs() < 1e-12);
            assert!(corr[i][j].abs() <= 1.0 + 1e-12);
        }
    }
    // Perfectly anti-correlated pair.
    assert!((corr[0][2] + 1.0).abs() < 1e-9);
}

#[test]
fn zero_variance_column_has_no_correlation() {
    let data = Dataset::from_rows((0..10).map(|i| vec![i as f64, 7.0]).collect()).unwrap();
    let corr = data.correlation_matrix();
    assert!(corr[0][1].is_nan());
    assert!(corr[1][0].is_nan());
    assert_eq!(corr[1][1], 1.0);
}

proptest! {
    #[test]
    fn correlation_is_symmetric_and_bounded_on_arbitrary_data(
        rows in prop::collection::vec(prop::collection::vec(-1e3f64..1e3, 3), 2..30),
    ) {
        let data = Dataset::from_rows(rows).unwrap();
        let corr = data.correlation_matrix();
        for i in 0..3 {
            for j in 0..3 {
                // A degenerate (zero-variance) column makes the whole
                // pair undefined, in both directions.
                if corr[i][j].is_nan() {
                    prop_assert!(corr[j][i].is_nan());
                    continue;
                }
                prop_assert!((corr[i][j] - corr[j][i]).abs() < 1e-6);
                prop_assert!(corr[i][j].abs() <= 1.0 + 1e-6);
            }
        }
    }
}
