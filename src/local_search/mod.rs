//! Local search operators for improving a closed tour.
//!
//! - [`two_opt()`] — 2-opt segment reversal, first improvement, continues scanning
//! - [`lin_kernighan_lite()`] — Single-exchange Lin-Kernighan variant, restarts after each move
//! - [`refine()`] — Engine selecting one of the above via [`RefinementMove`]

mod lin_kernighan;
mod refine;
mod two_opt;

pub use lin_kernighan::lin_kernighan_lite;
pub use refine::{refine, refine_observed, RefinementMove, RefinementStats};
pub use two_opt::two_opt;
