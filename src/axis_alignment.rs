//! Single-axis alignment of a coarse block to a fixed reference block.
//!
//! Before:
//!   |   |rcs|   |   |  reference
//!   .---.---.---.---.
//!  rmin   <-rl->   rmax
//! omin      <-ol->      omax
//!  .------.------.------.
//!  |      | ocs  |      |  other
//!
//! After alignment the other block's cell size is an exact integer
//! multiple `n` of the reference's, and its low face sits on the lattice
//! `rmin + k * ocs`. Either the reference length or the reference cell
//! size is protected; the other block is always free to move and resize.

use tracing::debug;

use crate::block::{Axis, AxisSpan};
use crate::error::{AlignError, AlignResult, BlockRole};
use crate::number_theory::next_poisson_admissible;

/// Cell-size ratio below which the other block counts as finer than the
/// reference. Float-tolerance guard around the exact cutoff of 0.5; a
/// ratio of exactly 0.5 is rejected.
const MIN_COARSENING_RATIO: f64 = 0.501;

fn validate(role: BlockRole, axis: Axis, span: &AxisSpan) -> AlignResult<()> {
    if !(span.min < span.max) {
        return Err(AlignError::InvalidBounds {
            role,
            axis,
            min: span.min,
            max: span.max,
        });
    }
    if span.count == 0 {
        return Err(AlignError::ZeroCellCount { role, axis });
    }
    Ok(())
}

/// Align the coarse `other` span to the fixed `reference` span along `axis`.
///
/// Returns the updated `(reference, other)` spans. The reference may change
/// count, and either its cell size (`protect_length`) or its high bound
/// (otherwise); its low bound never moves. The Poisson count constraint is
/// never applied along x regardless of the flag, since the solver
/// constraint only binds the axes orthogonal to the splitting direction.
pub fn align_axis(
    axis: Axis,
    reference: AxisSpan,
    other: AxisSpan,
    poisson: bool,
    protect_length: bool,
) -> AlignResult<(AxisSpan, AxisSpan)> {
    validate(BlockRole::Reference, axis, &reference)?;
    validate(BlockRole::Other, axis, &other)?;
    let poisson = poisson && axis != Axis::X;

    let ref_len = reference.length();
    let other_len = other.length();
    let mut ref_cs = reference.cell_size();

    let ratio = other.cell_size() / ref_cs;
    if ratio <= MIN_COARSENING_RATIO {
        return Err(AlignError::FinerThanReference { axis, ratio });
    }
    // Integer coarse-to-fine ratio: every coarse cell covers n fine cells.
    let n = ratio.round() as usize;

    // Reference count becomes a nonzero multiple of n so the reference
    // grid tiles cleanly into groups of n cells.
    let groups = (reference.count as f64 / n as f64).round().max(1.0) as usize;
    let mut ref_count = groups * n;
    if poisson {
        ref_count = next_poisson_admissible(ref_count);
    }

    let mut ref_max = reference.max;
    if protect_length {
        // Reference length is fixed; its cell size shrinks to absorb
        // the new count.
        ref_cs = ref_len / ref_count as f64;
    } else {
        // Reference cell size is fixed; its length grows instead.
        ref_max = reference.min + ref_cs * ref_count as f64;
    }

    // Other cell size is derived, never independently chosen again.
    let other_cs = ref_cs * n as f64;
    let mut other_count = (other_len / other_cs).round().max(1.0) as usize;
    if poisson {
        other_count = next_poisson_admissible(other_count);
    }

    // Snap the other block's low face onto the nearest lattice point of
    // spacing other_cs measured from the reference's low face.
    let other_min = reference.min + ((other.min - reference.min) / other_cs).round() * other_cs;
    let other_max = other_min + other_cs * other_count as f64;

    debug!(%axis, n, ref_cs, other_cs, "aligned axis");

    Ok((
        AxisSpan {
            count: ref_count,
            min: reference.min,
            max: ref_max,
        },
        AxisSpan {
            count: other_count,
            min: other_min,
            max: other_max,
        },
    ))
}
