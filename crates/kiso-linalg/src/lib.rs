//! Small, fixed-size linear algebra for rendering and geometry code.
//!
//! The crate provides 2, 3 and 4-dimensional [`Vector`]s, square [`Matrix`] types of the same
//! sizes, and a [`Quat`]ernion type for rotations. All of them are generic over the element type,
//! with [`f32`] aliases (`Vec3f`, `Mat4f`, `Quatf`, ...) for the common case.
//!
//! # Conventions
//!
//! - Methods taking `self` by value return a new value and leave the receiver untouched. Their
//!   in-place counterparts end in `_mut`, mutate the receiver and return `&mut Self` so that calls
//!   can be chained.
//! - Operations that are undefined for some inputs (inverting a singular matrix, rotating around a
//!   zero-length axis) return [`Option`]. When they fail, in-place variants leave the receiver
//!   unchanged.
//! - Matrices are stored row-major. `a * b` is the mathematical product `a·b`, and `m * v`
//!   multiplies each row of `m` with the column vector `v`.
//! - Approximate comparisons (`equals`, [`assert_approx_eq!`]) use an absolute per-component
//!   threshold of [`Float::DEFAULT_THRESHOLD`] unless told otherwise.
//!
//! # Non-Goals
//!
//! - Dynamically-sized vectors and matrices. Dimensions are const generic parameters.
//! - Non-[`Copy`] element types.
//! - SIMD-specific code paths. Elements are stored unpadded, so every type here can be cast to
//!   and from bytes with [`bytemuck`] when its element type allows it.

pub mod approx;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;

#[cfg(test)]
pub(crate) fn init_logger() {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}
