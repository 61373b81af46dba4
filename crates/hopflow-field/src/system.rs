//! Site positions attached to a hopping graph.

use crate::error::{Error, Result};
use hopflow_graph::HoppingGraph;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A finalized 2D system: one position per graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    positions: Vec<Point>,
    graph: HoppingGraph,
}

impl System {
    /// Checks that every node has a finite position and that the graph stores each hopping
    /// in both directions.
    pub fn new(positions: Vec<Point>, graph: HoppingGraph) -> Result<Self> {
        if positions.len() != graph.num_nodes() {
            return Err(Error::PositionCount {
                positions: positions.len(),
                nodes: graph.num_nodes(),
            });
        }
        if let Some(site) = positions
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(Error::NonFinitePosition { site });
        }
        graph.validate()?;
        Ok(Self { positions, graph })
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn position(&self, site: usize) -> Option<Point> {
        self.positions.get(site).copied()
    }

    pub fn graph(&self) -> &HoppingGraph {
        &self.graph
    }

    pub fn num_sites(&self) -> usize {
        self.positions.len()
    }

    /// `(min, max)` corners, or `None` for a system without sites.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| {
                    (
                        Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                        Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                    )
                }),
        )
    }

    /// Pairs of sites closer than `threshold`, each pair reported once as `(lower, higher)`.
    pub fn coinciding_sites(&self, threshold: f64) -> Vec<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.positions.len()).collect();
        order.sort_by(|&a, &b| self.positions[a].x.total_cmp(&self.positions[b].x));

        let mut out = Vec::new();
        for (i, &a) in order.iter().enumerate() {
            let pa = self.positions[a];
            for &b in &order[i + 1..] {
                let pb = self.positions[b];
                if pb.x - pa.x >= threshold {
                    break;
                }
                if pa.distance(pb) < threshold {
                    out.push((a.min(b), a.max(b)));
                }
            }
        }
        out.sort_unstable();
        out
    }
}
