//! Vector fields sampled on a regular 2D grid.

/// Samples of a 2D vector field on the grid `x[ix], y[iy]`.
///
/// Storage is row-major over `(ix, iy)`, so the layout matches an `(nx, ny, 2)` array.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    x: Vec<f64>,
    y: Vec<f64>,
    spacing: f64,
    data: Vec<[f64; 2]>,
}

impl VectorField {
    /// A zero field on a uniform grid with `nx * ny` points starting at `origin`.
    pub fn zeros(origin: (f64, f64), spacing: f64, nx: usize, ny: usize) -> Self {
        Self {
            x: (0..nx).map(|i| origin.0 + i as f64 * spacing).collect(),
            y: (0..ny).map(|j| origin.1 + j as f64 * spacing).collect(),
            spacing,
            data: vec![[0.0; 2]; nx * ny],
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    pub fn data(&self) -> &[[f64; 2]] {
        &self.data
    }

    pub fn get(&self, ix: usize, iy: usize) -> Option<[f64; 2]> {
        if ix >= self.x.len() || iy >= self.y.len() {
            return None;
        }
        Some(self.data[ix * self.y.len() + iy])
    }

    pub(crate) fn add_at(&mut self, ix: usize, iy: usize, value: [f64; 2]) {
        let ny = self.y.len();
        let slot = &mut self.data[ix * ny + iy];
        slot[0] += value[0];
        slot[1] += value[1];
    }

    /// One vector component (`0` for x, `1` for y) as a row-major `nx * ny` array.
    pub fn component(&self, axis: usize) -> Vec<f64> {
        self.data.iter().map(|v| v[axis]).collect()
    }

    /// The `axis` component along the grid column at `ix`, as a function of `y`.
    pub fn column(&self, ix: usize, axis: usize) -> Vec<f64> {
        let ny = self.y.len();
        self.data[ix * ny..(ix + 1) * ny]
            .iter()
            .map(|v| v[axis])
            .collect()
    }

    /// The `axis` component along the grid row at `iy`, as a function of `x`.
    pub fn row(&self, iy: usize, axis: usize) -> Vec<f64> {
        let ny = self.y.len();
        (0..self.x.len())
            .map(|ix| self.data[ix * ny + iy][axis])
            .collect()
    }

    pub fn nearest_x_index(&self, x0: f64) -> Option<usize> {
        nearest_index(&self.x, x0)
    }

    pub fn nearest_y_index(&self, y0: f64) -> Option<usize> {
        nearest_index(&self.y, y0)
    }

    /// Largest absolute component-wise difference to a field on the same grid.
    ///
    /// Returns `None` when the grids differ in shape.
    pub fn max_abs_diff(&self, other: &VectorField) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .flat_map(|(a, b)| [(a[0] - b[0]).abs(), (a[1] - b[1]).abs()])
                .fold(0.0, f64::max),
        )
    }

    /// `self + factor * other`, for fields on the same grid.
    pub fn add_scaled(&self, factor: f64, other: &VectorField) -> Option<VectorField> {
        if self.shape() != other.shape() {
            return None;
        }
        let mut out = self.clone();
        for (a, b) in out.data.iter_mut().zip(&other.data) {
            a[0] += factor * b[0];
            a[1] += factor * b[1];
        }
        Some(out)
    }
}

fn nearest_index(axis: &[f64], value: f64) -> Option<usize> {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map(|(i, _)| i)
}
