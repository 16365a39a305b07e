//! Derived grid-quality metrics for a block descriptor, independent of
//! alignment.

use serde::Serialize;

use crate::block::Block;
use crate::number_theory::next_poisson_admissible;

/// Aspect ratio reported when a cell size is zero.
const DEGENERATE_ASPECT_RATIO: f64 = 999.0;

/// Cell counts from a bounding box and desired per-axis cell sizes.
///
/// Each count is `round(length / desired)` floored at 1. When `poisson` is
/// set all three counts are adjusted to Poisson-admissible integers; this
/// is a general-purpose sizing helper, unlike alignment where the
/// constraint binds only y and z.
pub fn counts_from_cell_sizes(bounds: [f64; 6], desired: [f64; 3], poisson: bool) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for (axis, count) in counts.iter_mut().enumerate() {
        let length = bounds[2 * axis + 1] - bounds[2 * axis];
        *count = ((length / desired[axis]).round().max(1.0)) as usize;
        if poisson {
            *count = next_poisson_admissible(*count);
        }
    }
    counts
}

/// Cell counts adjusted to satisfy the Poisson constraint.
///
/// The first count is exempt: the solver constraint only binds the two
/// axes orthogonal to the primary splitting direction.
pub fn poisson_counts(counts: [usize; 3]) -> [usize; 3] {
    [
        counts[0],
        next_poisson_admissible(counts[1]),
        next_poisson_admissible(counts[2]),
    ]
}

/// Quality metrics for one block descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridQuality {
    /// True when the counts already satisfy the Poisson constraint.
    pub has_poisson_counts: bool,
    pub cell_sizes: [f64; 3],
    pub cell_count: usize,
    /// Max pairwise ratio among the sorted cell sizes, or 999.0 for
    /// degenerate (zero-size) cells.
    pub aspect_ratio: f64,
}

/// Compute cell goodness, sizes, count and aspect ratio for a block.
pub fn grid_quality(block: &Block) -> GridQuality {
    let cell_sizes = block.cell_sizes();

    let mut sorted = cell_sizes;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let aspect_ratio = if sorted[0] == 0.0 || sorted[1] == 0.0 {
        DEGENERATE_ASPECT_RATIO
    } else {
        (sorted[2] / sorted[0])
            .max(sorted[2] / sorted[1])
            .max(sorted[1] / sorted[0])
    };

    GridQuality {
        has_poisson_counts: block.counts == poisson_counts(block.counts),
        cell_sizes,
        cell_count: block.cell_count(),
        aspect_ratio,
    }
}
