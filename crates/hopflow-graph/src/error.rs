#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge {edge} references node {node}, but the graph has {num_nodes} nodes")]
    NodeOutOfRange {
        edge: usize,
        node: usize,
        num_nodes: usize,
    },

    #[error("edge {edge} is a self loop on node {node}")]
    SelfLoop { edge: usize, node: usize },

    #[error("hopping graphs store every hopping twice; got an odd edge count {num_edges}")]
    OddEdgeCount { num_edges: usize },

    #[error("edge {edge} ({from} -> {to}) has no reverse edge")]
    UnpairedEdge { edge: usize, from: usize, to: usize },

    #[error("edge {edge} ({from} -> {to}) appears more than once")]
    DuplicateEdge { edge: usize, from: usize, to: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
