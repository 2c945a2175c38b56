//! Fisher's Z conditional-independence test for continuous data.
//!
//! The correlation matrix is computed once at construction and shared
//! read-only by every test call; each call inverts only the small
//! submatrix over `{x, y} ∪ S`.

use meeker_core::{Dataset, IndependenceOracle};

use super::special;

/// Fisher-Z oracle over a precomputed correlation matrix.
pub struct FisherZ {
    corr: Vec<Vec<f64>>,
    samples: usize,
    vars: usize,
}

impl FisherZ {
    pub fn new(data: &Dataset) -> Self {
        Self {
            corr: data.correlation_matrix(),
            samples: data.rows(),
            vars: data.cols(),
        }
    }

    /// Partial correlation of `x` and `y` given `s`, from the inverse of
    /// the correlation submatrix over `[x, y, s...]`. NaN if singular.
    fn partial_correlation(&self, x: usize, y: usize, s: &[usize]) -> f64 {
        let vars: Vec<usize> = [x, y].iter().copied().chain(s.iter().copied()).collect();
        let k = vars.len();
        let sub: Vec<Vec<f64>> = vars
            .iter()
            .map(|&a| vars.iter().map(|&b| self.corr[a][b]).collect())
            .collect();
        // A NaN entry means a zero-variance column: the query is
        // ill-posed, not independent.
        if sub.iter().any(|row| row.iter().any(|v| v.is_nan())) {
            return f64::NAN;
        }

        match invert(sub, k) {
            Some(inv) => -inv[0][1] / (inv[0][0] * inv[1][1]).sqrt(),
            None => f64::NAN,
        }
    }
}

impl IndependenceOracle for FisherZ {
    fn p_value(&self, x: usize, y: usize, s: &[usize]) -> f64 {
        // Ill-posed below |S| + 3 samples; NaN makes the engine abort.
        let spare = self.samples as isize - s.len() as isize - 3;
        if spare <= 0 {
            return f64::NAN;
        }

        let r = self.partial_correlation(x, y, s);
        if r.is_nan() {
            return f64::NAN;
        }
        if r.abs() >= 1.0 {
            return 0.0;
        }

        let z = 0.5 * ((1.0 + r) / (1.0 - r)).ln();
        let stat = (spare as f64).sqrt() * z.abs();
        2.0 * special::normal_sf(stat)
    }

    fn variable_count(&self) -> usize {
        self.vars
    }
}

/// Gauss-Jordan inversion with partial pivoting. None when singular.
fn invert(mut m: Vec<Vec<f64>>, k: usize) -> Option<Vec<Vec<f64>>> {
    let mut inv: Vec<Vec<f64>> = (0..k)
        .map(|i| (0..k).map(|j| f64::from(u8::from(i == j))).collect())
        .collect();

    for col in 0..k {
        let pivot_row = (col..k)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        m.swap(col, pivot_row);
        inv.swap(col, pivot_row);

        let pivot = m[col][col];
        for j in 0..k {
            m[col][j] /= pivot;
            inv[col][j] /= pivot;
        }
        for row in 0..k {
            if row == col {
                continue;
            }
            let factor = m[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..k {
                m[row][j] -= factor * m[col][j];
                inv[row][j] -= factor * inv[col][j];
            }
        }
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_chain_data() -> Dataset {
        // x0 drives x1 drives x2, with deterministic "noise" to keep the
        // correlations strictly inside (-1, 1).
        let rows: Vec<Vec<f64>> = (0..40)
            .map(|i| {
                let t = i as f64;
                let e1 = ((i * 7) % 11) as f64 - 5.0;
                let e2 = ((i * 5) % 13) as f64 - 6.0;
                let x0 = t;
                let x1 = 0.8 * x0 + e1;
                let x2 = 0.8 * x1 + e2;
                vec![x0, x1, x2]
            })
            .collect();
        Dataset::from_rows(rows).unwrap()
    }

    #[test]
    fn symmetric_in_endpoints() {
        let oracle = FisherZ::new(&linear_chain_data());
        let p_xy = oracle.p_value(0, 2, &[1]);
        let p_yx = oracle.p_value(2, 0, &[1]);
        assert!((p_xy - p_yx).abs() < 1e-12);
    }

    #[test]
    fn marginal_dependence_beats_conditional() {
        let oracle = FisherZ::new(&linear_chain_data());
        let marginal = oracle.p_value(0, 2, &[]);
        let conditional = oracle.p_value(0, 2, &[1]);
        assert!(marginal < conditional);
        assert!((0.0..=1.0).contains(&marginal));
        assert!((0.0..=1.0).contains(&conditional));
    }

    #[test]
    fn too_few_samples_is_nan() {
        let data = Dataset::from_rows(vec![
            vec![1.0, 2.0, 0.5],
            vec![2.0, 1.0, 0.25],
            vec![3.0, 4.0, 1.5],
        ])
        .unwrap();
        let oracle = FisherZ::new(&data);
        assert!(oracle.p_value(0, 1, &[2]).is_nan());
    }

    #[test]
    fn constant_column_is_ill_posed() {
        let data = Dataset::from_rows((0..20).map(|i| vec![3.0, i as f64]).collect()).unwrap();
        let oracle = FisherZ::new(&data);
        assert!(oracle.p_value(0, 1, &[]).is_nan());
        assert!(oracle.p_value(1, 0, &[]).is_nan());
    }

    #[test]
    fn inverts_identity() {
        let m = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let inv = invert(m, 2).unwrap();
        assert!((inv[0][0] - 1.0).abs() < 1e-12);
        assert!(inv[0][1].abs() < 1e-12);
    }
}
