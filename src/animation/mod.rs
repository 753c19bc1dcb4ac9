//! Frame-driven animation of the slot strip.
//!
//! One [`AnimationRunner`] exists per in-flight transition. It turns elapsed
//! time into a progress value, eases it, and writes interpolated geometry
//! (or fade values) into the live slot array. Slide, maximize and restore
//! all share the same `start + round((end - start) * t)` primitive and only
//! differ in how endpoints are chosen.

pub mod easing;
mod runner;

pub use easing::EasingFunction;
pub use runner::{
    prepare_center, prepare_slide, AnimationKind, AnimationRunner, CenterGuard,
};
