//! Unordered hopping key.
//!
//! Both directed edges of a hopping map to the same key, so the key can index a hash map
//! of "first seen" hoppings.

/// An unordered pair of node indices, normalized to `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hopping {
    lo: usize,
    hi: usize,
}

impl Hopping {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn sites(self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    pub fn contains(self, node: usize) -> bool {
        self.lo == node || self.hi == node
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other(self, node: usize) -> Option<usize> {
        if node == self.lo {
            Some(self.hi)
        } else if node == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Hopping {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
