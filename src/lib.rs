pub mod axis_alignment;
pub mod block;
pub mod block_alignment;
pub mod error;
pub mod number_theory;
pub mod quality;

pub use axis_alignment::align_axis;
pub use block::{Axis, AxisSpan, Block};
pub use block_alignment::{align_blocks, AlignOptions, Alignment, AxisAction};
pub use error::{AlignError, AlignResult, BlockRole};
pub use number_theory::{is_poisson_admissible, next_poisson_admissible, prime_factors};
pub use quality::{counts_from_cell_sizes, grid_quality, poisson_counts, GridQuality};
