//! Three-axis block alignment: far-apart gate, boundary snapping, and
//! per-axis delegation to the axis aligner.

use serde::Serialize;
use tracing::debug;

use crate::axis_alignment::align_axis;
use crate::block::{Axis, Block};
use crate::error::{AlignError, AlignResult, BlockRole};

/// Options for a block alignment call.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlignOptions {
    /// Constrain cell counts to Poisson-admissible integers along y and z.
    pub poisson: bool,
    /// Keep the reference block's length fixed and shrink its cell size
    /// instead of extending its high bound.
    pub protect_length: bool,
}

/// Decision taken on one axis during block alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AxisAction {
    /// Blocks were too far apart; nothing was modified.
    Far,
    /// The other block's high face was snapped onto the reference's low face.
    SnapLow,
    /// The other block's low face was snapped onto the reference's high face.
    SnapHigh,
    /// The axis aligner resized and repositioned the other block.
    Aligned,
}

/// Result of a block alignment call: both updated blocks plus the
/// per-axis decision record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alignment {
    pub reference: Block,
    pub other: Block,
    pub actions: [AxisAction; 3],
}

fn validate(role: BlockRole, block: &Block) -> AlignResult<()> {
    for axis in Axis::ALL {
        let span = block.span(axis);
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
    }
    Ok(())
}

/// True when the blocks' facing boundaries are separated by more than the
/// per-axis tolerance on some axis, in which case alignment is pointless.
fn is_far(reference: &Block, other: &Block, deltas: &[f64; 3]) -> bool {
    Axis::ALL.iter().any(|&axis| {
        let delta = deltas[axis.index()];
        reference.min(axis) - other.max(axis) > delta
            || other.min(axis) - reference.max(axis) > delta
    })
}

/// Align `other` to the fixed `reference` block.
///
/// The per-axis tolerance is the reference block's own cell size. If the
/// blocks are far apart on any axis the inputs are returned unchanged.
/// Otherwise each axis is processed independently: boundaries within
/// tolerance are snapped exactly onto the reference (no resizing), and the
/// remaining axes are aligned to an integer cell-size ratio. The reference
/// block can change count or bounds only through axis alignment, never
/// through snapping.
pub fn align_blocks(
    reference: &Block,
    other: &Block,
    options: AlignOptions,
) -> AlignResult<Alignment> {
    validate(BlockRole::Reference, reference)?;
    validate(BlockRole::Other, other)?;

    let deltas = reference.cell_sizes();

    if is_far(reference, other, &deltas) {
        debug!("blocks are far apart, no modification");
        return Ok(Alignment {
            reference: reference.clone(),
            other: other.clone(),
            actions: [AxisAction::Far; 3],
        });
    }

    let mut reference = reference.clone();
    let mut other = other.clone();
    let mut actions = [AxisAction::Far; 3];

    for axis in Axis::ALL {
        let delta = deltas[axis.index()];
        let r = reference.span(axis);
        let o = other.span(axis);

        if (r.min - o.max).abs() <= delta {
            debug!(%axis, "snapping other high face onto reference low face");
            other.set_max(axis, r.min);
            actions[axis.index()] = AxisAction::SnapLow;
        } else if (o.min - r.max).abs() <= delta {
            debug!(%axis, "snapping other low face onto reference high face");
            other.set_min(axis, r.max);
            actions[axis.index()] = AxisAction::SnapHigh;
        } else {
            debug!(%axis, "aligning");
            let (r_new, o_new) = align_axis(axis, r, o, options.poisson, options.protect_length)?;
            reference.set_span(axis, r_new);
            other.set_span(axis, o_new);
            actions[axis.index()] = AxisAction::Aligned;
        }
    }

    Ok(Alignment {
        reference,
        other,
        actions,
    })
}
