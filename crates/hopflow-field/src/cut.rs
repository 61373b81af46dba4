//! Current through a cut: exact sums over edges and quadrature over interpolated fields.

use crate::calculus::simpson;
use crate::error::{Error, Result};
use crate::field::VectorField;
use hopflow_graph::EdgeList;

/// Sum of `current[k]` over the edges `(a, b)` selected by `crosses(a, b)`.
///
/// Edge `(a, b)` carries flow from `b` into `a`. Selecting the edges whose `b` lies on one
/// side and whose `a` lies on the other gives the net current crossing the cut from the first
/// side to the second.
pub fn cut_current<G, F>(graph: &G, current: &[f64], mut crosses: F) -> Result<f64>
where
    G: EdgeList,
    F: FnMut(usize, usize) -> bool,
{
    if current.len() != graph.num_edges() {
        return Err(Error::CurrentLength {
            expected: graph.num_edges(),
            got: current.len(),
        });
    }
    Ok(graph
        .edges()
        .zip(current)
        .filter(|&((a, b), _)| crosses(a, b))
        .map(|(_, v)| v)
        .sum())
}

/// Integral of the x component along the grid column closest to `x0`.
pub fn flux_through_vertical_cut(field: &VectorField, x0: f64) -> Option<f64> {
    let ix = field.nearest_x_index(x0)?;
    Some(simpson(&field.column(ix, 0), field.spacing()))
}

/// Integral of the y component along the grid row closest to `y0`.
pub fn flux_through_horizontal_cut(field: &VectorField, y0: f64) -> Option<f64> {
    let iy = field.nearest_y_index(y0)?;
    Some(simpson(&field.row(iy, 1), field.spacing()))
}
