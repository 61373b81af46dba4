//! Finite differences and quadrature on uniform grids.

use crate::field::VectorField;

/// Discrete derivative with unit sample spacing.
///
/// Central differences inside, one-sided differences at both ends. Fewer than two samples
/// give zeros.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![0.0; n];
    if n < 2 {
        return out;
    }
    out[0] = values[1] - values[0];
    out[n - 1] = values[n - 1] - values[n - 2];
    for i in 1..n - 1 {
        out[i] = 0.5 * (values[i + 1] - values[i - 1]);
    }
    out
}

/// Sum of the discrete derivatives of each component along its own axis.
///
/// Derivatives are taken per grid index (see [`gradient`]); divide by
/// [`VectorField::spacing`] for physical units. The result is row-major over `(ix, iy)`.
pub fn divergence(field: &VectorField) -> Vec<f64> {
    let (nx, ny) = field.shape();
    let mut out = vec![0.0; nx * ny];

    for iy in 0..ny {
        for (ix, d) in gradient(&field.row(iy, 0)).into_iter().enumerate() {
            out[ix * ny + iy] += d;
        }
    }
    for ix in 0..nx {
        for (iy, d) in gradient(&field.column(ix, 1)).into_iter().enumerate() {
            out[ix * ny + iy] += d;
        }
    }
    out
}

/// Composite Simpson rule over equally spaced samples.
///
/// With an even number of samples one interval is left over; the result averages the two
/// choices of closing it with the trapezoid rule at either end.
pub fn simpson(values: &[f64], dx: f64) -> f64 {
    match values.len() {
        0 | 1 => 0.0,
        2 => trapezoid(values, dx),
        n if n % 2 == 1 => simpson_odd(values, dx),
        n => {
            let first = simpson_odd(&values[..n - 1], dx) + trapezoid(&values[n - 2..], dx);
            let last = trapezoid(&values[..2], dx) + simpson_odd(&values[1..], dx);
            0.5 * (first + last)
        }
    }
}

fn simpson_odd(values: &[f64], dx: f64) -> f64 {
    let n = values.len();
    let mut sum = values[0] + values[n - 1];
    for (i, v) in values.iter().enumerate().take(n - 1).skip(1) {
        sum += if i % 2 == 1 { 4.0 * v } else { 2.0 * v };
    }
    sum * dx / 3.0
}

fn trapezoid(values: &[f64], dx: f64) -> f64 {
    values.windows(2).map(|w| 0.5 * (w[0] + w[1]) * dx).sum()
}
