//! Net flow of a current defined over directed edges.

use crate::error::{Error, Result};
use hopflow_graph::{EdgeList, Error as GraphError};

/// Net outflow of every node.
///
/// Edge `(a, b)` carrying `v` is a flow of `v` from `b` into `a`, so each edge value is
/// counted against its destination `b`. The reverse edge carries `-v`.
pub fn net_outflow<G: EdgeList>(graph: &G, current: &[f64]) -> Result<Vec<f64>> {
    let num_nodes = graph.num_nodes();
    if current.len() != graph.num_edges() {
        return Err(Error::CurrentLength {
            expected: graph.num_edges(),
            got: current.len(),
        });
    }

    let mut out = vec![0.0; num_nodes];
    for (k, ((_, b), value)) in graph.edges().zip(current).enumerate() {
        let Some(slot) = out.get_mut(b) else {
            return Err(GraphError::NodeOutOfRange {
                edge: k,
                node: b,
                num_nodes,
            }
            .into());
        };
        *slot += value;
    }
    Ok(out)
}

pub fn is_divergence_free<G: EdgeList>(graph: &G, current: &[f64], atol: f64) -> Result<bool> {
    Ok(net_outflow(graph, current)?
        .iter()
        .all(|v| v.abs() <= atol))
}
