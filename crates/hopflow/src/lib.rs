#![forbid(unsafe_code)]

//! `hopflow` computes divergence-free ("rotational") current bases on lattice hopping graphs
//! and smooths per-hopping currents into gridded vector fields.
//!
//! # Features
//!
//! - `field` (default): site positions, current interpolation and the grid helpers used to
//!   check a field (`hopflow::field`)

pub use hopflow_basis::{
    CurrentBasis, IncidenceMatrix, NullSpace, NullSpaceOptions, PermutationEntry,
    PermutationMatrix, Tolerance, is_divergence_free, net_outflow, null_space, numerical_rank,
    rotational_currents, rotational_currents_with,
};
pub use hopflow_graph::{EdgeList, Hopping, HoppingGraph, RawEdges, alg};

pub mod graph {
    pub use hopflow_graph::*;
}

pub mod basis {
    pub use hopflow_basis::*;
}

#[cfg(feature = "field")]
pub mod field {
    pub use hopflow_field::*;

    use hopflow_basis::{CurrentBasis, NullSpaceOptions};

    /// Builds the rotational basis of `system`, combines its rows with `coefficients` and
    /// interpolates the resulting current.
    ///
    /// Returns the basis alongside the field so callers can reuse it for further
    /// combinations.
    pub fn rotational_field(
        system: &System,
        coefficients: &[f64],
        basis_options: &NullSpaceOptions,
        options: &InterpolationOptions,
    ) -> crate::Result<(CurrentBasis, VectorField)> {
        let basis = hopflow_basis::rotational_currents_with(system.graph(), basis_options)?;
        let current = basis.combine(coefficients)?;
        let field = interpolate_current(system, &current, options)?;
        Ok((basis, field))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] hopflow_graph::Error),
    #[error(transparent)]
    Basis(#[from] hopflow_basis::Error),
    #[cfg(feature = "field")]
    #[error(transparent)]
    Field(#[from] hopflow_field::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
