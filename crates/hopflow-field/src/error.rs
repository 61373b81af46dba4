#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] hopflow_graph::Error),

    #[error("system has {positions} site positions but its graph has {nodes} nodes")]
    PositionCount { positions: usize, nodes: usize },

    #[error("site {site} has a non-finite position")]
    NonFinitePosition { site: usize },

    #[error("current has {got} entries, but the system has {expected} edges")]
    CurrentLength { expected: usize, got: usize },

    #[error("hopping {from} -> {to} has zero length")]
    DegenerateHopping { from: usize, to: usize },

    #[error("grid spacing {spacing} needs more than {max_points} grid points")]
    GridTooLarge { spacing: f64, max_points: usize },

    #[error("system has no hoppings to interpolate")]
    NoHoppings,

    #[error("invalid interpolation options: {message}")]
    InvalidOptions { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
