use serde::Serialize;

/// One of the three spatial axes of a structured grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Cell count and physical extent of one block along a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AxisSpan {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl AxisSpan {
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.length() / self.count as f64
    }
}

/// An axis-aligned rectangular grid descriptor.
///
/// `counts` holds the per-axis cell counts `(i, j, k)`; `bounds` holds
/// `(x0, x1, y0, y1, z0, z1)` with `min < max` on each axis. The grid
/// points themselves are never stored; cell sizes are derived.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub counts: [usize; 3],
    pub bounds: [f64; 6],
}

impl Block {
    pub fn new(counts: [usize; 3], bounds: [f64; 6]) -> Self {
        Self { counts, bounds }
    }

    #[inline]
    pub fn count(&self, axis: Axis) -> usize {
        self.counts[axis.index()]
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> f64 {
        self.bounds[2 * axis.index()]
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> f64 {
        self.bounds[2 * axis.index() + 1]
    }

    #[inline]
    pub fn length(&self, axis: Axis) -> f64 {
        self.max(axis) - self.min(axis)
    }

    #[inline]
    pub fn cell_size(&self, axis: Axis) -> f64 {
        self.length(axis) / self.count(axis) as f64
    }

    /// Per-axis cell sizes `(dx, dy, dz)`.
    #[inline]
    pub fn cell_sizes(&self) -> [f64; 3] {
        [
            self.cell_size(Axis::X),
            self.cell_size(Axis::Y),
            self.cell_size(Axis::Z),
        ]
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.counts[0] * self.counts[1] * self.counts[2]
    }

    #[inline]
    pub fn span(&self, axis: Axis) -> AxisSpan {
        AxisSpan {
            count: self.count(axis),
            min: self.min(axis),
            max: self.max(axis),
        }
    }

    #[inline]
    pub fn set_span(&mut self, axis: Axis, span: AxisSpan) {
        self.counts[axis.index()] = span.count;
        self.bounds[2 * axis.index()] = span.min;
        self.bounds[2 * axis.index() + 1] = span.max;
    }

    #[inline]
    pub fn set_min(&mut self, axis: Axis, value: f64) {
        self.bounds[2 * axis.index()] = value;
    }

    #[inline]
    pub fn set_max(&mut self, axis: Axis, value: f64) {
        self.bounds[2 * axis.index() + 1] = value;
    }
}
