//! Row-major numeric table: rows are samples, columns are variables.

use serde::{Deserialize, Serialize};

use crate::errors::{MeekerError, MeekerResult};

/// A validated observational dataset.
///
/// Construction checks the input contract once; every later read can
/// assume a rectangular, finite table with at least one row and column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Dataset {
    /// Build a dataset from sample rows.
    ///
    /// Rejects empty input, ragged rows, and non-finite values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MeekerResult<Self> {
        if rows.is_empty() {
            return Err(MeekerError::InvalidDataset {
                reason: "no sample rows".to_string(),
            });
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(MeekerError::InvalidDataset {
                reason: "rows have no columns".to_string(),
            });
        }

        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MeekerError::InvalidDataset {
                    reason: format!("row {i} has {} columns, expected {cols}", row.len()),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(MeekerError::InvalidDataset {
                        reason: format!("non-finite value at row {i}, column {j}"),
                    });
                }
                values.push(v);
            }
        }

        Ok(Self {
            values,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of samples.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of variables.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// One variable's samples, in row order.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// Pearson correlation matrix over all variable pairs.
    ///
    /// Computed once per discovery run and shared read-only by every
    /// Fisher-Z test call. A zero-variance pair has no defined
    /// correlation and yields NaN (the diagonal stays 1); the oracle
    /// surfaces such queries as ill-posed rather than deciding them.
    pub fn correlation_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.cols;
        let means: Vec<f64> = (0..n)
            .map(|c| (0..self.rows).map(|r| self.get(r, c)).sum::<f64>() / self.rows as f64)
            .collect();

        let mut corr = vec![vec![0.0; n]; n];
        for i in 0..n {
            corr[i][i] = 1.0;
            for j in (i + 1)..n {
                let mut cov = 0.0;
                let mut var_i = 0.0;
                let mut var_j = 0.0;
                for r in 0..self.rows {
                    let di = self.get(r, i) - means[i];
                    let dj = self.get(r, j) - means[j];
                    cov += di * dj;
                    var_i += di * di;
                    var_j += dj * dj;
                }
                let denom = (var_i * var_j).sqrt();
                let rho = if denom > 0.0 { cov / denom } else { f64::NAN };
                corr[i][j] = rho;
                corr[j][i] = rho;
            }
        }
        corr
    }
}
