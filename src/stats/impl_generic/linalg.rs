//! Small dense matrix helpers for least squares.
//!
//! Matrices are row-major `Vec<Vec<f64>>`; the systems solved here have one
//! row per regression coefficient, so they stay small.

use crate::stats::error::{StatsError, StatsResult};

/// Pivots smaller than this, relative to the largest entry, count as zero.
const SINGULAR_TOL: f64 = 1e-12;

/// XᵀX for a row-major design matrix with `k` columns.
pub(crate) fn gram(x: &[Vec<f64>], k: usize) -> Vec<Vec<f64>> {
    let mut xtx = vec![vec![0.0; k]; k];
    for row in x {
        for i in 0..k {
            for j in i..k {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..k {
        for j in 0..i {
            xtx[i][j] = xtx[j][i];
        }
    }
    xtx
}

/// Xᵀy for a row-major design matrix with `k` columns.
pub(crate) fn xt_y(x: &[Vec<f64>], y: &[f64], k: usize) -> Vec<f64> {
    let mut out = vec![0.0; k];
    for (row, &yi) in x.iter().zip(y) {
        for (o, &v) in out.iter_mut().zip(row) {
            *o += v * yi;
        }
    }
    out
}

/// Matrix-vector product.
pub(crate) fn mat_vec(a: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    a.iter()
        .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
        .collect()
}

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// Fails with `SingularMatrix` as soon as the best available pivot in a
/// column is numerically zero, instead of dividing by it.
pub(crate) fn invert(a: &[Vec<f64>], context: &str) -> StatsResult<Vec<Vec<f64>>> {
    let n = a.len();
    let scale = a
        .iter()
        .flatten()
        .fold(0.0f64, |m, v| m.max(v.abs()))
        .max(f64::MIN_POSITIVE);

    // Augmented [A | I]
    let mut aug: Vec<Vec<f64>> = a
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut r = row.clone();
            r.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            r
        })
        .collect();

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for row in col + 1..n {
            if aug[row][col].abs() > max_val {
                max_val = aug[row][col].abs();
                max_row = row;
            }
        }
        if max_val <= SINGULAR_TOL * scale {
            return Err(StatsError::SingularMatrix {
                context: context.to_string(),
                column: col,
            });
        }
        if max_row != col {
            aug.swap(col, max_row);
        }

        let pivot = aug[col][col];
        for v in aug[col].iter_mut() {
            *v /= pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in col..2 * n {
                aug[row][j] -= factor * aug[col][j];
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_2x2() {
        let a = vec![vec![4.0, 7.0], vec![2.0, 6.0]];
        let inv = invert(&a, "test").unwrap();
        // det = 10
        assert!((inv[0][0] - 0.6).abs() < 1e-12);
        assert!((inv[0][1] + 0.7).abs() < 1e-12);
        assert!((inv[1][0] + 0.2).abs() < 1e-12);
        assert!((inv[1][1] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_invert_needs_pivoting() {
        // Zero on the leading diagonal.
        let a = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, -3.0, 8.0],
        ];
        let inv = invert(&a, "test").unwrap();
        for i in 0..3 {
            let col: Vec<f64> = (0..3).map(|r| inv[r][i]).collect();
            let product = mat_vec(&a, &col);
            for (j, v) in product.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_invert_singular() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert!(matches!(
            invert(&a, "test"),
            Err(StatsError::SingularMatrix { column: 1, .. })
        ));
    }

    #[test]
    fn test_gram_and_xty() {
        let x = vec![vec![1.0, 2.0], vec![1.0, 3.0]];
        let g = gram(&x, 2);
        assert_eq!(g, vec![vec![2.0, 5.0], vec![5.0, 13.0]]);
        assert_eq!(xt_y(&x, &[1.0, 1.0], 2), vec![2.0, 5.0]);
    }
}
