#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] hopflow_graph::Error),

    #[error("current has {got} entries, but the graph has {expected} edges")]
    CurrentLength { expected: usize, got: usize },

    #[error("expected {expected} coefficients (one per basis vector), got {got}")]
    CoefficientCount { expected: usize, got: usize },

    #[error("matrix has {got} rows, but the permutation has {expected} hopping columns")]
    RowCount { expected: usize, got: usize },

    #[error("singular value decomposition of a {rows}x{cols} matrix did not converge")]
    SvdDidNotConverge { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
