//! Hopping graph container.
//!
//! This module contains the owned [`HoppingGraph`] plus the [`EdgeList`] seam that lets callers
//! hand borrowed edge slices to the basis builder without copying them.

use crate::error::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

mod hopping;

pub use hopping::Hopping;

/// Read-only view of a directed edge sequence over `0..num_nodes`.
pub trait EdgeList {
    fn num_nodes(&self) -> usize;

    fn num_edges(&self) -> usize;

    /// Directed edges in storage order. Consumed in a single pass.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_;
}

/// Borrowed edge slice with an explicit node count.
#[derive(Debug, Clone, Copy)]
pub struct RawEdges<'a> {
    num_nodes: usize,
    edges: &'a [(usize, usize)],
}

impl<'a> RawEdges<'a> {
    pub fn new(num_nodes: usize, edges: &'a [(usize, usize)]) -> Self {
        Self { num_nodes, edges }
    }
}

impl EdgeList for RawEdges<'_> {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoppingGraph {
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl HoppingGraph {
    /// Stores `edges` exactly as given. Use [`HoppingGraph::validate`] to check the doubled-edge
    /// invariant.
    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            num_nodes,
            edges: edges.into_iter().collect(),
        }
    }

    /// Builds a graph from undirected hoppings, storing both directions of each one.
    ///
    /// Edges end up sorted by `(source, destination)`. Repeated hoppings (in either
    /// orientation) collapse into one.
    pub fn from_hoppings(
        num_nodes: usize,
        hoppings: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let mut directed: BTreeSet<(usize, usize)> = BTreeSet::new();
        for (idx, (a, b)) in hoppings.into_iter().enumerate() {
            for node in [a, b] {
                if node >= num_nodes {
                    return Err(Error::NodeOutOfRange {
                        edge: idx,
                        node,
                        num_nodes,
                    });
                }
            }
            if a == b {
                return Err(Error::SelfLoop { edge: idx, node: a });
            }
            directed.insert((a, b));
            directed.insert((b, a));
        }

        Ok(Self {
            num_nodes,
            edges: directed.into_iter().collect(),
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_hoppings(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge(&self, idx: usize) -> Option<(usize, usize)> {
        self.edges.get(idx).copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.edges.iter().filter(|&&(a, _)| a == node).count()
    }

    /// Destinations of the edges leaving `node`, in storage order.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|&&(a, _)| a == node)
            .map(|&(_, b)| b)
            .collect()
    }

    /// Unique hoppings in first-seen order.
    pub fn hoppings(&self) -> Vec<Hopping> {
        let mut seen: FxHashSet<Hopping> = FxHashSet::default();
        let mut out = Vec::with_capacity(self.num_hoppings());
        for &(a, b) in &self.edges {
            let hop = Hopping::new(a, b);
            if seen.insert(hop) {
                out.push(hop);
            }
        }
        out
    }

    /// For every edge, the position of its reverse edge.
    pub fn reverse_indices(&self) -> Result<Vec<usize>> {
        let mut index: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        index.reserve(self.edges.len());
        for (k, &(a, b)) in self.edges.iter().enumerate() {
            if index.insert((a, b), k).is_some() {
                return Err(Error::DuplicateEdge {
                    edge: k,
                    from: a,
                    to: b,
                });
            }
        }

        self.edges
            .iter()
            .enumerate()
            .map(|(k, &(a, b))| {
                index.get(&(b, a)).copied().ok_or(Error::UnpairedEdge {
                    edge: k,
                    from: a,
                    to: b,
                })
            })
            .collect()
    }

    /// Checks node ranges, self loops and the doubled-edge invariant.
    pub fn validate(&self) -> Result<()> {
        for (k, &(a, b)) in self.edges.iter().enumerate() {
            for node in [a, b] {
                if node >= self.num_nodes {
                    return Err(Error::NodeOutOfRange {
                        edge: k,
                        node,
                        num_nodes: self.num_nodes,
                    });
                }
            }
            if a == b {
                return Err(Error::SelfLoop { edge: k, node: a });
            }
        }
        if self.edges.len() % 2 != 0 {
            return Err(Error::OddEdgeCount {
                num_edges: self.edges.len(),
            });
        }
        self.reverse_indices().map(|_| ())
    }
}

impl EdgeList for HoppingGraph {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hoppings_orders_edges_like_a_csr_graph() {
        let g = HoppingGraph::from_hoppings(3, [(2, 0), (0, 1)]).expect("graph");
        assert_eq!(g.as_slice(), &[(0, 1), (0, 2), (1, 0), (2, 0)]);
        assert_eq!(g.num_hoppings(), 2);
    }

    #[test]
    fn from_hoppings_collapses_repeated_hoppings() {
        let g = HoppingGraph::from_hoppings(2, [(0, 1), (1, 0), (0, 1)]).expect("graph");
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn reverse_indices_pair_up_edges() {
        let g = HoppingGraph::from_edges(3, [(0, 1), (1, 2), (2, 1), (1, 0)]);
        assert_eq!(g.reverse_indices().expect("paired"), vec![3, 2, 1, 0]);
    }
}
