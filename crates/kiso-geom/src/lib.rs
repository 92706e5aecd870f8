//! 2D geometric primitives and the queries between them.
//!
//! [`Bounds2`] is an axis-aligned box, [`Ray2`] a half-line given by an origin and a direction.
//! Both are plain [`Copy`] values built on [`Vec2f`][kiso_linalg::Vec2f].

mod bounds;
mod ray;

pub use bounds::*;
pub use ray::*;

#[cfg(test)]
pub(crate) fn init_logger() {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}
