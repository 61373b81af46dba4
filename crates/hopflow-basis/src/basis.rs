//! Divergence-free current basis over the doubled edge space.

use crate::error::{Error, Result};
use crate::incidence::IncidenceMatrix;
use crate::null_space::{NullSpaceOptions, null_space};
use hopflow_graph::EdgeList;
use nalgebra::DMatrix;

/// Linearly independent divergence-free currents, one per row, in the edge order of the
/// graph they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentBasis {
    rows: DMatrix<f64>,
    incidence_rank: usize,
    tolerance: f64,
}

pub fn rotational_currents<G: EdgeList>(graph: &G) -> Result<CurrentBasis> {
    rotational_currents_with(graph, &NullSpaceOptions::default())
}

/// Computes a basis of divergence-free currents for a closed hopping graph.
///
/// The basis spans the right null space of the incidence matrix, lifted onto both directions
/// of every hopping (the reverse edge carries the negated value). Trees and edgeless graphs
/// yield an empty basis.
pub fn rotational_currents_with<G: EdgeList>(
    graph: &G,
    options: &NullSpaceOptions,
) -> Result<CurrentBasis> {
    let _span = tracing::debug_span!(
        "rotational_currents",
        nodes = graph.num_nodes(),
        edges = graph.num_edges()
    )
    .entered();

    let (incidence, perm) = IncidenceMatrix::build(graph)?;
    let ns = null_space(incidence.matrix(), options.tolerance)?;
    let lifted = perm.lift_matrix(&ns.basis)?;

    tracing::debug!(
        hoppings = incidence.num_hoppings(),
        rank = ns.rank,
        basis_size = lifted.ncols(),
        "current basis"
    );

    Ok(CurrentBasis {
        rows: lifted.transpose(),
        incidence_rank: ns.rank,
        tolerance: ns.tolerance,
    })
}

impl CurrentBasis {
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.nrows() == 0
    }

    pub fn num_edges(&self) -> usize {
        self.rows.ncols()
    }

    /// Rank of the incidence matrix the basis was derived from.
    pub fn incidence_rank(&self) -> usize {
        self.incidence_rank
    }

    /// Singular value threshold used for the rank decision.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn row(&self, idx: usize) -> Option<Vec<f64>> {
        (idx < self.len()).then(|| self.rows.row(idx).iter().copied().collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.rows
            .row_iter()
            .map(|row| row.iter().copied().collect())
    }

    /// `sum_i coefficients[i] * row(i)`.
    pub fn combine(&self, coefficients: &[f64]) -> Result<Vec<f64>> {
        if coefficients.len() != self.len() {
            return Err(Error::CoefficientCount {
                expected: self.len(),
                got: coefficients.len(),
            });
        }
        let mut out = vec![0.0; self.num_edges()];
        for (coeff, row) in coefficients.iter().zip(self.rows.row_iter()) {
            for (o, v) in out.iter_mut().zip(row.iter()) {
                *o += coeff * v;
            }
        }
        Ok(out)
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.rows
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.rows
    }
}
