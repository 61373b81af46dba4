//! SVD-based null space and numerical rank.

use crate::error::{Error, Result};
use nalgebra::DMatrix;
use nalgebra::linalg::SVD;
use serde::Deserialize;

/// How singular values are split into "zero" and "non-zero".
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// `max(singular_values) * max(rows, cols) * f64::EPSILON`.
    #[default]
    Auto,
    /// Singular values `<=` this value count as zero.
    Absolute(f64),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NullSpaceOptions {
    pub tolerance: Tolerance,
}

#[derive(Debug, Clone)]
pub struct NullSpace {
    /// `(cols, cols - rank)`; every column is a unit vector `x` with `A x = 0`.
    pub basis: DMatrix<f64>,
    pub rank: usize,
    /// Threshold actually used to compute `rank`.
    pub tolerance: f64,
}

/// The automatic rank threshold for a matrix of the given `(rows, cols)` shape.
pub fn rank_tolerance(singular_values: &[f64], shape: (usize, usize)) -> f64 {
    let max_s = singular_values.iter().copied().fold(0.0_f64, f64::max);
    max_s * (shape.0.max(shape.1) as f64) * f64::EPSILON
}

impl Tolerance {
    pub fn resolve(self, singular_values: &[f64], shape: (usize, usize)) -> f64 {
        match self {
            Tolerance::Auto => rank_tolerance(singular_values, shape),
            Tolerance::Absolute(tol) => tol,
        }
    }
}

pub fn null_space(a: &DMatrix<f64>, tolerance: Tolerance) -> Result<NullSpace> {
    let (rows, cols) = a.shape();
    if cols == 0 {
        return Ok(NullSpace {
            basis: DMatrix::zeros(0, 0),
            rank: 0,
            tolerance: 0.0,
        });
    }

    // nalgebra computes a thin SVD; padding with zero rows up to a square matrix keeps the
    // singular values and yields all `cols` right singular vectors.
    let padded = if rows < cols {
        let mut p = DMatrix::<f64>::zeros(cols, cols);
        p.view_mut((0, 0), (rows, cols)).copy_from(a);
        p
    } else {
        a.clone()
    };

    let svd = SVD::try_new(padded, false, true, f64::EPSILON, 0)
        .ok_or(Error::SvdDidNotConverge { rows, cols })?;
    let v_t = svd
        .v_t
        .ok_or(Error::SvdDidNotConverge { rows, cols })?;
    let singular_values = svd.singular_values.as_slice();

    let tol = tolerance.resolve(singular_values, (rows, cols));
    let rank = singular_values.iter().filter(|&&s| s > tol).count();

    let null_rows: Vec<usize> = singular_values
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s <= tol)
        .map(|(i, _)| i)
        .collect();
    let basis = DMatrix::<f64>::from_fn(cols, null_rows.len(), |i, j| v_t[(null_rows[j], i)]);

    tracing::debug!(rows, cols, rank, tolerance = tol, "null space");

    Ok(NullSpace {
        basis,
        rank,
        tolerance: tol,
    })
}

pub fn numerical_rank(a: &DMatrix<f64>, tolerance: Tolerance) -> Result<usize> {
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    let svd = SVD::try_new(a.clone(), false, false, f64::EPSILON, 0)
        .ok_or(Error::SvdDidNotConverge { rows, cols })?;
    let singular_values = svd.singular_values.as_slice();
    let tol = tolerance.resolve(singular_values, (rows, cols));
    Ok(singular_values.iter().filter(|&&s| s > tol).count())
}
