//! Graph algorithms over [`EdgeList`] implementors.
//!
//! Out-of-range endpoints are skipped rather than reported; call
//! [`HoppingGraph::validate`](crate::HoppingGraph::validate) first when that matters.

use crate::graph::{EdgeList, Hopping};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Connected components, each sorted, in order of their smallest node.
pub fn components<G: EdgeList>(g: &G) -> Vec<Vec<usize>> {
    let n = g.num_nodes();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (a, b) in g.edges() {
        if a < n && b < n {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
    }

    let mut visited = vec![false; n];
    let mut out: Vec<Vec<usize>> = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        q.push_back(start);
        let mut comp: Vec<usize> = Vec::new();

        while let Some(v) = q.pop_front() {
            comp.push(v);
            for &u in &adjacency[v] {
                if !visited[u] {
                    visited[u] = true;
                    q.push_back(u);
                }
            }
        }

        comp.sort_unstable();
        out.push(comp);
    }

    out
}

pub fn unique_hopping_count<G: EdgeList>(g: &G) -> usize {
    let n = g.num_nodes();
    g.edges()
        .filter(|&(a, b)| a < n && b < n)
        .map(|(a, b)| Hopping::new(a, b))
        .collect::<FxHashSet<_>>()
        .len()
}

/// Dimension of the cycle space: `hoppings - nodes + components`.
///
/// This is the number of independent divergence-free currents the graph supports.
pub fn cycle_rank<G: EdgeList>(g: &G) -> usize {
    let hoppings = unique_hopping_count(g);
    let components = components(g).len();
    (hoppings + components).saturating_sub(g.num_nodes())
}

pub fn is_forest<G: EdgeList>(g: &G) -> bool {
    cycle_rank(g) == 0
}
