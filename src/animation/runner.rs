//! Animation runner executes a single carousel transition.

use web_time::{Duration, Instant};

use super::easing::EasingFunction;
use crate::carousel::Direction;
use crate::layout::{image_extent, Dimensions, SlotGeometry};
use crate::slots::{SlotAnimation, VisibleSlot};

/// What a running animation does to the slot strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Shift every slot one position in the given direction.
    Slide(Direction),
    /// Grow the center slot to the full viewport, fading the others out.
    Maximize,
    /// Shrink the center slot back into the strip, fading the others in.
    Restore,
}

/// Inputs to the natural-width guard on the center slot.
///
/// Re-read every frame so dimensions that resolve mid-animation take effect
/// immediately. With unknown dimensions the guard never engages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterGuard {
    /// Natural dimensions of the center image, once resolved.
    pub natural: Option<Dimensions>,
    /// Horizontal slot padding.
    pub padding_x: u32,
    /// Vertical slot padding.
    pub padding_y: u32,
}

impl CenterGuard {
    fn extent(&self, geometry: SlotGeometry) -> Option<i32> {
        image_extent(self.natural, geometry, self.padding_x, self.padding_y)
    }
}

/// Set slide endpoints: each slot takes on its neighbour's geometry.
///
/// Moving left brings the image left of center into the middle, so slot
/// `i` travels to slot `i + 1`; moving right is the mirror image. The slot
/// with no neighbour in the direction of travel keeps its geometry. All
/// slots become visible so the incoming sentinel can slide into view.
pub fn prepare_slide(slots: &mut [VisibleSlot], direction: Direction) {
    let targets: Vec<SlotGeometry> = slots.iter().map(|s| s.geometry).collect();
    for (i, slot) in slots.iter_mut().enumerate() {
        slot.visible = true;
        let neighbour = match direction {
            Direction::Left => targets.get(i + 1),
            Direction::Right => i.checked_sub(1).and_then(|j| targets.get(j)),
        };
        slot.animation =
            neighbour.map(|to| SlotAnimation::between(slot.geometry, *to));
    }
}

/// Set maximize/restore endpoints: only the center slot moves.
pub fn prepare_center(slots: &mut [VisibleSlot], target: SlotGeometry) {
    for slot in slots.iter_mut() {
        slot.animation = slot
            .is_center
            .then(|| SlotAnimation::between(slot.geometry, target));
    }
}

/// Drives one transition from progress 0 to 1 over its duration.
///
/// The runner holds:
/// - the kind of transition and its easing curve
/// - timing information
/// - the maximize guard latch (once the center image stops growing it stays
///   frozen for the rest of the animation)
pub struct AnimationRunner {
    /// Transition kind.
    kind: AnimationKind,
    /// When the animation started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Progress curve.
    easing: EasingFunction,
    /// Whether the center slot may keep growing (maximize only).
    growing: bool,
}

impl AnimationRunner {
    /// Start a new animation now.
    #[must_use]
    pub fn new(kind: AnimationKind, duration: Duration, easing: EasingFunction) -> Self {
        Self::with_start_time(Instant::now(), kind, duration, easing)
    }

    /// Start a new animation at an explicit instant.
    #[must_use]
    pub fn with_start_time(
        start_time: Instant,
        kind: AnimationKind,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            kind,
            start_time,
            duration,
            easing,
            growing: true,
        }
    }

    /// Transition kind.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Total animation duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the animation has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased progress; exactly 1.0 once raw progress reaches 1.
    #[must_use]
    pub fn eased_t(&self, raw_t: f32) -> f32 {
        if raw_t >= 1.0 {
            1.0
        } else {
            self.easing.evaluate(raw_t).clamp(0.0, 1.0)
        }
    }

    /// Apply the frame at raw progress `raw_t` to `slots`.
    ///
    /// Returns `true` when this was the final frame.
    pub fn apply(
        &mut self,
        slots: &mut [VisibleSlot],
        raw_t: f32,
        guard: &CenterGuard,
    ) -> bool {
        let t = self.eased_t(raw_t);
        let done = raw_t >= 1.0;

        match self.kind {
            AnimationKind::Slide(_) => {
                for slot in slots.iter_mut() {
                    slot.advance(t);
                }
            }
            AnimationKind::Maximize => {
                for slot in slots.iter_mut() {
                    if !slot.is_center {
                        slot.fade = 1.0 - t;
                        continue;
                    }
                    if done {
                        slot.advance(1.0);
                    } else if self.growing {
                        slot.advance(t);
                        if let Some(extent) = guard.extent(slot.geometry) {
                            self.growing = slot.geometry.width <= extent;
                        }
                    }
                }
            }
            AnimationKind::Restore => {
                for slot in slots.iter_mut() {
                    if !slot.is_center {
                        slot.fade = t;
                        continue;
                    }
                    let Some(anim) = slot.animation else {
                        continue;
                    };
                    let (width, _) = anim.sample(t);
                    let shrinking = done
                        || guard
                            .extent(slot.geometry)
                            .is_none_or(|extent| width < extent);
                    if shrinking {
                        slot.advance(t);
                    }
                }
            }
        }

        if done {
            for slot in slots.iter_mut() {
                slot.animation = None;
            }
        }
        log::trace!("{:?} frame t={t:.3}", self.kind);
        done
    }
}

impl std::fmt::Debug for AnimationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRunner")
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(position: usize, width: i32, x: i32, is_center: bool) -> VisibleSlot {
        VisibleSlot {
            position,
            source_index: position,
            url: format!("{position}.png"),
            is_center,
            is_sentinel: false,
            visible: true,
            geometry: SlotGeometry {
                width,
                height: 300,
                x,
            },
            fade: 1.0,
            animation: None,
        }
    }

    fn strip() -> Vec<VisibleSlot> {
        let mut slots = vec![
            slot(0, 0, 0, false),
            slot(1, 300, 0, true),
            slot(2, 0, 302, false),
        ];
        slots[0].is_sentinel = true;
        slots[0].visible = false;
        slots[2].is_sentinel = true;
        slots[2].visible = false;
        slots
    }

    fn linear(kind: AnimationKind, start: Instant) -> AnimationRunner {
        AnimationRunner::with_start_time(
            start,
            kind,
            Duration::from_millis(100),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn test_runner_progress() {
        let start = Instant::now();
        let runner = linear(AnimationKind::Maximize, start);

        assert!((runner.progress(start) - 0.0).abs() < 0.01);
        let mid = start + Duration::from_millis(50);
        assert!((runner.progress(mid) - 0.5).abs() < 0.01);
        assert!(runner.is_complete(start + Duration::from_millis(100)));
        assert!((runner.progress(start + Duration::from_millis(200)) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_is_complete_immediately() {
        let runner = AnimationRunner::new(
            AnimationKind::Restore,
            Duration::ZERO,
            EasingFunction::Linear,
        );
        assert!(runner.is_complete(Instant::now()));
        assert_eq!(runner.duration(), Duration::ZERO);
    }

    #[test]
    fn test_slide_left_targets_right_neighbour() {
        let mut slots = strip();
        prepare_slide(&mut slots, Direction::Left);

        assert!(slots.iter().all(|s| s.visible));
        assert_eq!(
            slots[0].animation,
            Some(SlotAnimation {
                start_width: 0,
                end_width: 300,
                start_x: 0,
                end_x: 0
            })
        );
        assert_eq!(slots[1].animation.map(|a| (a.end_width, a.end_x)), Some((0, 302)));
        assert_eq!(slots[2].animation, None);
    }

    #[test]
    fn test_slide_right_targets_left_neighbour() {
        let mut slots = strip();
        prepare_slide(&mut slots, Direction::Right);

        assert_eq!(slots[0].animation, None);
        assert_eq!(slots[1].animation.map(|a| (a.end_width, a.end_x)), Some((0, 0)));
        assert_eq!(slots[2].animation.map(|a| (a.end_width, a.end_x)), Some((300, 0)));
    }

    #[test]
    fn test_slide_frames_interpolate_and_snap() {
        let start = Instant::now();
        let mut slots = strip();
        prepare_slide(&mut slots, Direction::Left);
        let mut runner = linear(AnimationKind::Slide(Direction::Left), start);
        let guard = CenterGuard::default();

        assert!(!runner.apply(&mut slots, 0.5, &guard));
        assert_eq!(slots[0].geometry.width, 150);
        assert_eq!(slots[1].geometry.width, 150);
        assert_eq!(slots[1].geometry.x, 151);
        // untouched: no endpoints
        assert_eq!(slots[2].geometry.x, 302);

        assert!(runner.apply(&mut slots, 1.0, &guard));
        assert_eq!(slots[0].geometry.width, 300);
        assert_eq!(slots[1].geometry.x, 302);
        assert!(slots.iter().all(|s| s.animation.is_none()));
    }

    #[test]
    fn test_maximize_fades_sides_and_grows_center() {
        let start = Instant::now();
        let mut slots = vec![
            slot(0, 100, 0, false),
            slot(1, 200, 100, true),
            slot(2, 100, 301, false),
        ];
        prepare_center(&mut slots, SlotGeometry { width: 400, height: 300, x: 0 });
        assert!(slots[0].animation.is_none());
        let mut runner = linear(AnimationKind::Maximize, start);
        let guard = CenterGuard::default();

        assert!(!runner.apply(&mut slots, 0.25, &guard));
        assert_eq!(slots[0].fade, 0.75);
        assert_eq!(slots[1].geometry.width, 250);
        assert_eq!(slots[1].geometry.x, 75);

        assert!(runner.apply(&mut slots, 1.0, &guard));
        assert_eq!(slots[2].fade, 0.0);
        assert_eq!(slots[1].geometry, SlotGeometry { width: 400, height: 300, x: 0 });
    }

    #[test]
    fn test_overshooting_curve_is_clamped() {
        let start = Instant::now();
        let mut slots = strip();
        prepare_center(&mut slots, SlotGeometry { width: 400, height: 300, x: 0 });
        let mut runner = AnimationRunner::with_start_time(
            start,
            AnimationKind::Maximize,
            Duration::from_millis(100),
            EasingFunction::CubicHermite { c1: 2.0, c2: 2.0 },
        );
        assert_eq!(runner.eased_t(0.5), 1.0);

        assert!(!runner.apply(&mut slots, 0.5, &CenterGuard::default()));
        assert_eq!(slots[0].fade, 0.0);

        let undershoot = AnimationRunner::with_start_time(
            start,
            AnimationKind::Restore,
            Duration::from_millis(100),
            EasingFunction::CubicHermite { c1: -1.0, c2: 0.0 },
        );
        assert_eq!(undershoot.eased_t(0.1), 0.0);
    }

    #[test]
    fn test_maximize_guard_freezes_at_image_extent() {
        let start = Instant::now();
        let mut slots = vec![slot(0, 100, 0, false), slot(1, 200, 100, true)];
        prepare_center(&mut slots, SlotGeometry { width: 1000, height: 300, x: 0 });
        let mut runner = linear(AnimationKind::Maximize, start);
        // square image in a 300px tall slot: height-bound beyond ~300px
        let guard = CenterGuard {
            natural: Some(Dimensions::new(10, 10)),
            padding_x: 0,
            padding_y: 0,
        };

        assert!(!runner.apply(&mut slots, 0.1, &guard));
        assert_eq!(slots[1].geometry.width, 280);
        assert!(!runner.apply(&mut slots, 0.2, &guard));
        assert_eq!(slots[1].geometry.width, 360);
        // frozen from here on; sides keep fading
        assert!(!runner.apply(&mut slots, 0.6, &guard));
        assert_eq!(slots[1].geometry.width, 360);
        assert!((slots[0].fade - 0.4).abs() < 1e-6);
        // final frame snaps to the end
        assert!(runner.apply(&mut slots, 1.0, &guard));
        assert_eq!(slots[1].geometry.width, 1000);
    }

    #[test]
    fn test_restore_waits_until_below_image_extent() {
        let start = Instant::now();
        let mut slots = vec![slot(0, 100, 0, false), slot(1, 1000, 0, true)];
        slots[0].fade = 0.0;
        prepare_center(&mut slots, SlotGeometry { width: 200, height: 300, x: 400 });
        let mut runner = linear(AnimationKind::Restore, start);
        let guard = CenterGuard {
            natural: Some(Dimensions::new(10, 10)),
            padding_x: 0,
            padding_y: 0,
        };

        // interpolated width 920 is still wider than the 300px image
        assert!(!runner.apply(&mut slots, 0.1, &guard));
        assert_eq!(slots[1].geometry.width, 1000);
        assert_eq!(slots[0].fade, 0.1);
        // interpolated width 280 < 300: follow the interpolation
        assert!(!runner.apply(&mut slots, 0.9, &guard));
        assert_eq!(slots[1].geometry.width, 280);
        assert!(runner.apply(&mut slots, 1.0, &guard));
        assert_eq!(slots[1].geometry, SlotGeometry { width: 200, height: 300, x: 400 });
        assert_eq!(slots[0].fade, 1.0);
    }

    #[test]
    fn test_restore_without_dimensions_interpolates_every_frame() {
        let start = Instant::now();
        let mut slots = vec![slot(0, 1000, 0, true)];
        prepare_center(&mut slots, SlotGeometry { width: 200, height: 300, x: 400 });
        let mut runner = linear(AnimationKind::Restore, start);

        assert!(!runner.apply(&mut slots, 0.5, &CenterGuard::default()));
        assert_eq!(slots[0].geometry.width, 600);
        assert_eq!(slots[0].geometry.x, 200);
    }
}
