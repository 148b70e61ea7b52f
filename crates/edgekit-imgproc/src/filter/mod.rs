//! Kernel convolution with configurable boundary handling.
//!
//! Filters are odd-sized square kernels with a normalization divisor
//! ([`Filter`]). [`apply_filter`] convolves an image under one of the
//! [`SideHandle`] boundary policies, either as a single pass or as an
//! 8-direction compass sweep built from 45 degree kernel rotations
//! ([`rotate`]).

mod border;
mod convolution;
mod descriptor;
pub mod presets;
mod rotate;

pub use border::SideHandle;
pub use convolution::apply_filter;
pub use descriptor::Filter;
pub use rotate::{rotate, rotation_permutation};
