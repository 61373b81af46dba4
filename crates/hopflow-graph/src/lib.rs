#![forbid(unsafe_code)]

//! Hopping graph container used by `hopflow`.
//!
//! A hopping graph stores every physical hopping twice, once per direction, the same way a
//! finalized tight-binding system exposes its graph. Nodes are plain indices in
//! `0..num_nodes`; edges are ordered `(source, destination)` pairs.

pub mod alg;
pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{EdgeList, Hopping, HoppingGraph, RawEdges};
