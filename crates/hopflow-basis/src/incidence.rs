//! Incidence and permutation matrices of a hopping graph.
//!
//! Column `i` of the incidence matrix is the `i`-th hopping in first-seen order, with `+1` on
//! the source row and `-1` on the destination row of the edge that introduced it. The
//! permutation matrix maps every directed edge back onto its hopping column, with a `-1` for
//! the reverse orientation.

use crate::error::{Error, Result};
use hopflow_graph::{EdgeList, Error as GraphError, Hopping};
use indexmap::IndexMap;
use nalgebra::DMatrix;
use rustc_hash::FxBuildHasher;

#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    matrix: DMatrix<f64>,
    orientations: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermutationEntry {
    pub column: usize,
    pub sign: f64,
}

/// Sparse `(num_edges, num_hoppings)` matrix with exactly one entry per row.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationMatrix {
    entries: Vec<PermutationEntry>,
    ncols: usize,
}

#[derive(Debug, Clone, Copy)]
struct SeenHopping {
    first_edge: usize,
    from: usize,
    to: usize,
    reversed: bool,
}

impl IncidenceMatrix {
    /// Builds the incidence matrix and the edge permutation in a single pass over the edges.
    pub fn build<G: EdgeList>(graph: &G) -> Result<(IncidenceMatrix, PermutationMatrix)> {
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();
        if num_edges % 2 != 0 {
            return Err(GraphError::OddEdgeCount { num_edges }.into());
        }

        let mut seen: IndexMap<Hopping, SeenHopping, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(num_edges / 2, FxBuildHasher);
        let mut entries: Vec<PermutationEntry> = Vec::with_capacity(num_edges);

        for (k, (a, b)) in graph.edges().enumerate() {
            for node in [a, b] {
                if node >= num_nodes {
                    return Err(GraphError::NodeOutOfRange {
                        edge: k,
                        node,
                        num_nodes,
                    }
                    .into());
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { edge: k, node: a }.into());
            }

            let key = Hopping::new(a, b);
            match seen.get_index_of(&key) {
                None => {
                    let column = seen.len();
                    seen.insert(
                        key,
                        SeenHopping {
                            first_edge: k,
                            from: a,
                            to: b,
                            reversed: false,
                        },
                    );
                    entries.push(PermutationEntry { column, sign: 1.0 });
                }
                Some(column) => {
                    let hop = &mut seen[column];
                    if hop.from == a || hop.reversed {
                        return Err(GraphError::DuplicateEdge {
                            edge: k,
                            from: a,
                            to: b,
                        }
                        .into());
                    }
                    hop.reversed = true;
                    entries.push(PermutationEntry { column, sign: -1.0 });
                }
            }
        }

        if let Some(hop) = seen.values().find(|hop| !hop.reversed) {
            return Err(GraphError::UnpairedEdge {
                edge: hop.first_edge,
                from: hop.from,
                to: hop.to,
            }
            .into());
        }

        let ncols = seen.len();
        let mut matrix = DMatrix::<f64>::zeros(num_nodes, ncols);
        let mut orientations = Vec::with_capacity(ncols);
        for (column, hop) in seen.values().enumerate() {
            matrix[(hop.from, column)] = 1.0;
            matrix[(hop.to, column)] = -1.0;
            orientations.push((hop.from, hop.to));
        }

        Ok((
            IncidenceMatrix {
                matrix,
                orientations,
            },
            PermutationMatrix { entries, ncols },
        ))
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }

    pub fn num_nodes(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn num_hoppings(&self) -> usize {
        self.matrix.ncols()
    }

    /// First-seen `(source, destination)` orientation of every hopping column.
    pub fn orientations(&self) -> &[(usize, usize)] {
        &self.orientations
    }
}

impl PermutationMatrix {
    pub fn nrows(&self) -> usize {
        self.entries.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn entries(&self) -> &[PermutationEntry] {
        &self.entries
    }

    /// `(row, column, value)` triplets, one per directed edge.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(row, e)| (row, e.column, e.sign))
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut out = DMatrix::<f64>::zeros(self.nrows(), self.ncols);
        for (row, col, value) in self.triplets() {
            out[(row, col)] = value;
        }
        out
    }

    /// Left-multiplies a `(ncols, k)` matrix, producing `(nrows, k)`.
    pub fn lift_matrix(&self, m: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        if m.nrows() != self.ncols {
            return Err(Error::RowCount {
                expected: self.ncols,
                got: m.nrows(),
            });
        }
        Ok(DMatrix::<f64>::from_fn(self.nrows(), m.ncols(), |row, col| {
            let e = self.entries[row];
            e.sign * m[(e.column, col)]
        }))
    }
}
