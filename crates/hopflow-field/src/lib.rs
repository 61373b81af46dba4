#![forbid(unsafe_code)]

//! Current density fields for lattice hopping graphs.
//!
//! A current array assigns a value to every directed edge of a hopping graph. Together with the
//! site positions this defines a "discrete" current density that is non-zero only on the
//! segments between hopped sites. [`interpolate_current`] smooths it with a normalized Gaussian
//! and samples the result on a regular grid, which keeps it linear in the current and
//! divergence-free wherever the current is conserved.
//!
//! The [`calculus`] and [`cut`] modules hold the helpers used to check those properties.

pub mod calculus;
pub mod cut;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod system;

pub use calculus::{divergence, gradient, simpson};
pub use cut::{cut_current, flux_through_horizontal_cut, flux_through_vertical_cut};
pub use error::{Error, Result};
pub use field::VectorField;
pub use interpolate::{InterpolationOptions, interpolate_current};
pub use system::{Point, System};

pub use hopflow_graph as graph;
