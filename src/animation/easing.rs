//! Easing functions for animation interpolation.
//!
//! Every curve fixes both endpoints. The fixed curves stay inside `[0, 1]`;
//! [`EasingFunction::CubicHermite`] does so only while both control points
//! are in `[0, 1]`, which [`EasingFunction::is_bounded`] reports.

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Cosine ease-in-out (slow start and end).
    CosineInOut,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CosineInOut => {
                (1.0 + (std::f32::consts::PI * (1.0 + t)).cos()) / 2.0
            }
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Whether every output of [`evaluate`](Self::evaluate) lies in `[0, 1]`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        match self {
            EasingFunction::CubicHermite { c1, c2 } => {
                (0.0..=1.0).contains(c1) && (0.0..=1.0).contains(c2)
            }
            _ => true,
        }
    }
}
