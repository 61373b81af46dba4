#![forbid(unsafe_code)]

//! Divergence-free current bases for lattice hopping graphs.
//!
//! A hopping graph stores each hopping as two opposite directed edges. The currents that
//! conserve charge at every site form the right null space of the node-by-hopping incidence
//! matrix; [`rotational_currents`] computes a basis of that space and lifts it back to the
//! doubled directed-edge layout used by current arrays.

pub mod basis;
pub mod error;
pub mod flow;
pub mod incidence;
pub mod null_space;

pub use basis::{CurrentBasis, rotational_currents, rotational_currents_with};
pub use error::{Error, Result};
pub use flow::{is_divergence_free, net_outflow};
pub use incidence::{IncidenceMatrix, PermutationEntry, PermutationMatrix};
pub use null_space::{NullSpace, NullSpaceOptions, Tolerance, null_space, numerical_rank};

pub use hopflow_graph as graph;
