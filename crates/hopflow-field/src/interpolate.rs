//! Gaussian smoothing of hopping currents onto a regular grid.

use crate::error::{Error, Result};
use crate::field::VectorField;
use crate::system::{Point, System};
use serde::Deserialize;
use statrs::function::erf::erf;

/// Contributions further than this many widths from a segment are below `1e-14` of the peak
/// and are skipped.
const KERNEL_CUTOFF: f64 = 8.0;

/// Sites closer than this fraction of the shortest hopping are reported as coinciding.
const COINCIDENCE_FRACTION: f64 = 1e-4;

/// Upper bound on `nx * ny`.
const MAX_GRID_POINTS: usize = 1 << 26;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpolationOptions {
    /// Grid points per shortest hopping length.
    pub n: usize,
    /// Gaussian width, in units of the shortest hopping length.
    pub sigma: f64,
    /// Grid margin around the outermost sites, in units of the Gaussian width.
    pub gauss_range: f64,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self {
            n: 9,
            sigma: 1.0,
            gauss_range: 5.0,
        }
    }
}

impl InterpolationOptions {
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidOptions {
                message: "n must be at least 1".to_string(),
            });
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(Error::InvalidOptions {
                message: format!("sigma must be positive and finite, got {}", self.sigma),
            });
        }
        if !(self.gauss_range.is_finite() && self.gauss_range >= 0.0) {
            return Err(Error::InvalidOptions {
                message: format!(
                    "gauss_range must be non-negative and finite, got {}",
                    self.gauss_range
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Point,
    end: Point,
    /// Unit vector from `start` to `end`.
    dir: (f64, f64),
    length: f64,
    current: f64,
}

/// Interpolates a per-edge current array onto a regular grid.
///
/// Edge `(a, b)` carrying `v` is a flow of `v` from site `b` into site `a`. Each hopping
/// contributes a line current along the segment between its sites, running from `b` to `a` of
/// its first-seen edge `(a, b)` and carrying `(J[fwd] - J[rev]) / 2`. The line current is
/// convolved with a normalized Gaussian, which has a closed form in `erf`: a point at distance
/// `t` along and `w` across a segment of length `L` receives
///
/// `exp(-w^2 / 2s^2) * (erf(t / s√2) - erf((t - L) / s√2)) / (2 s √(2π))`
///
/// times the hopping current. The result is linear in `current`, and the divergence of the
/// continuous field is the Gaussian-smoothed net outflow of the sites.
pub fn interpolate_current(
    system: &System,
    current: &[f64],
    options: &InterpolationOptions,
) -> Result<VectorField> {
    options.validate()?;
    let graph = system.graph();
    if current.len() != graph.num_edges() {
        return Err(Error::CurrentLength {
            expected: graph.num_edges(),
            got: current.len(),
        });
    }

    let _span = tracing::debug_span!(
        "interpolate_current",
        sites = system.num_sites(),
        edges = graph.num_edges()
    )
    .entered();

    let segments = segments(system, current)?;
    let min_length = segments
        .iter()
        .map(|s| s.length)
        .fold(f64::INFINITY, f64::min);
    if !min_length.is_finite() {
        return Err(Error::NoHoppings);
    }

    let coinciding = system.coinciding_sites(COINCIDENCE_FRACTION * min_length);
    if let Some(&(a, b)) = coinciding.first() {
        tracing::warn!(
            pairs = coinciding.len(),
            first = ?(a, b),
            "some sites are nearly coinciding; the interpolated current may look distorted"
        );
    }

    let sigma = options.sigma * min_length;
    let spacing = min_length / options.n as f64;
    let margin = options.gauss_range * sigma;
    let Some((lo, hi)) = system.bounding_box() else {
        return Err(Error::NoHoppings);
    };
    let origin = (lo.x - margin, lo.y - margin);
    let (nx, ny) = match (
        grid_len(hi.x + margin - origin.0, spacing),
        grid_len(hi.y + margin - origin.1, spacing),
    ) {
        (Some(nx), Some(ny)) if nx.checked_mul(ny).is_some_and(|p| p <= MAX_GRID_POINTS) => {
            (nx, ny)
        }
        _ => {
            return Err(Error::GridTooLarge {
                spacing,
                max_points: MAX_GRID_POINTS,
            });
        }
    };

    tracing::debug!(
        nx,
        ny,
        spacing,
        sigma,
        hoppings = segments.len(),
        "interpolation grid"
    );

    let mut field = VectorField::zeros(origin, spacing, nx, ny);
    for seg in segments.iter().filter(|s| s.current != 0.0) {
        accumulate_segment(&mut field, seg, sigma);
    }
    Ok(field)
}

fn segments(system: &System, current: &[f64]) -> Result<Vec<Segment>> {
    let graph = system.graph();
    let reverse = graph.reverse_indices()?;
    let positions = system.positions();

    let mut out = Vec::with_capacity(graph.num_hoppings());
    for (k, (a, b)) in graph.edges().enumerate() {
        let r = reverse[k];
        if r < k {
            continue;
        }
        let (start, end) = (positions[b], positions[a]);
        let length = start.distance(end);
        if length == 0.0 {
            return Err(Error::DegenerateHopping { from: a, to: b });
        }
        out.push(Segment {
            start,
            end,
            dir: ((end.x - start.x) / length, (end.y - start.y) / length),
            length,
            current: 0.5 * (current[k] - current[r]),
        });
    }
    Ok(out)
}

/// Points along one axis, or `None` when the axis alone exceeds [`MAX_GRID_POINTS`].
fn grid_len(extent: f64, spacing: f64) -> Option<usize> {
    // Tolerate rounding so that an extent of exactly `k * spacing` gives `k + 1` points.
    let intervals = ((extent / spacing) - 1e-9).ceil().max(0.0);
    if !(intervals < MAX_GRID_POINTS as f64) {
        return None;
    }
    Some(intervals as usize + 1)
}

fn accumulate_segment(field: &mut VectorField, seg: &Segment, sigma: f64) {
    let reach = KERNEL_CUTOFF * sigma;
    let norm = 1.0 / (2.0 * sigma * (2.0 * std::f64::consts::PI).sqrt());
    let erf_scale = 1.0 / (sigma * std::f64::consts::SQRT_2);
    let two_sigma2 = 2.0 * sigma * sigma;

    let (nx, ny) = field.shape();
    let spacing = field.spacing();
    let (x0, y0) = (field.x()[0], field.y()[0]);

    let index_range = |lo: f64, hi: f64, origin: f64, len: usize| {
        let first = ((lo - origin) / spacing).floor().max(0.0) as usize;
        let last = (((hi - origin) / spacing).ceil().max(0.0) as usize).min(len - 1);
        first..=last
    };
    let xs = index_range(
        seg.start.x.min(seg.end.x) - reach,
        seg.start.x.max(seg.end.x) + reach,
        x0,
        nx,
    );
    let ys = index_range(
        seg.start.y.min(seg.end.y) - reach,
        seg.start.y.max(seg.end.y) + reach,
        y0,
        ny,
    );

    let (ux, uy) = seg.dir;
    for ix in xs {
        let dx = x0 + ix as f64 * spacing - seg.start.x;
        for iy in ys.clone() {
            let dy = y0 + iy as f64 * spacing - seg.start.y;
            let along = dx * ux + dy * uy;
            let across2 = (dx * dx + dy * dy - along * along).max(0.0);
            if across2 > reach * reach {
                continue;
            }
            let weight = norm
                * (-across2 / two_sigma2).exp()
                * (erf(along * erf_scale) - erf((along - seg.length) * erf_scale));
            let magnitude = seg.current * weight;
            field.add_at(ix, iy, [magnitude * ux, magnitude * uy]);
        }
    }
}
