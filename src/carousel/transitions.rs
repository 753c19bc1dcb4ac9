//! Move, maximize and restore transitions, and what happens when they settle.

use std::cmp::Ordering;

use web_time::Instant;

use super::{Carousel, CarouselEvent, Direction, Phase};
use crate::animation::{prepare_center, prepare_slide, AnimationKind, AnimationRunner};
use crate::error::CarouselError;
use crate::layout::SlotGeometry;
use crate::sink::VisualSink;

impl<S: VisualSink> Carousel<S> {
    /// Start a one-slot move, or queue it behind the running transition.
    pub(super) fn start_move(&mut self, direction: Direction, now: Instant) {
        if self.state.image_count() == 0 {
            return;
        }
        if self.state.animation_running {
            self.state.pending_moves.push_back(direction);
            log::debug!(
                "queued move {direction:?} ({} pending)",
                self.state.pending_moves.len()
            );
            return;
        }
        if !self.options.animation.is_animated() {
            self.finish_move(direction);
            return;
        }

        log::debug!("slide {direction:?} from index {}", self.state.center_index);
        prepare_slide(self.slots.slots_mut(), direction);
        self.begin_animation(AnimationKind::Slide(direction), Phase::Sliding(direction), now);
    }

    /// Side slots move that many steps toward the center; the center slot
    /// toggles maximize.
    pub(super) fn click(&mut self, slot: usize, now: Instant) -> Result<(), CarouselError> {
        let Some(center) = self.slots.center_position() else {
            return Ok(());
        };
        if slot >= self.slots.len() {
            return Err(CarouselError::Index {
                index: slot,
                len: self.slots.len(),
            });
        }
        match slot.cmp(&center) {
            Ordering::Less => {
                for _ in slot..center {
                    self.start_move(Direction::Left, now);
                }
            }
            Ordering::Greater => {
                for _ in center..slot {
                    self.start_move(Direction::Right, now);
                }
            }
            Ordering::Equal => self.toggle_maximize(now),
        }
        Ok(())
    }

    /// Maximize or restore the center image; ignored mid-transition.
    pub(super) fn toggle_maximize(&mut self, now: Instant) {
        if self.state.animation_running {
            log::debug!("toggle maximize ignored: {:?} in progress", self.phase);
            return;
        }
        if self.slots.is_empty() {
            return;
        }
        if self.state.is_maximized() {
            self.start_restore(now);
        } else if self.state.active_side_count > 0 {
            self.start_maximize(now);
        } else {
            log::debug!("toggle maximize ignored in single-image mode");
        }
    }

    fn start_maximize(&mut self, now: Instant) {
        self.state.saved_side_count = self.state.active_side_count;
        self.state.active_side_count = 0;
        log::debug!("maximize (saved side count {})", self.state.saved_side_count);
        if !self.options.animation.is_animated() {
            self.finish_toggle();
            return;
        }

        let target = SlotGeometry {
            width: self.viewport.width as i32,
            height: self.viewport.height as i32,
            x: 0,
        };
        prepare_center(self.slots.slots_mut(), target);
        self.begin_animation(AnimationKind::Maximize, Phase::Maximizing, now);
    }

    /// Rebuild the full window first, with the center still at its
    /// maximized geometry and the side slots faded out, then shrink.
    fn start_restore(&mut self, now: Instant) {
        let maximized = self.slots.center().map(|slot| slot.geometry);
        self.state.active_side_count = self.state.saved_side_count;
        self.state.saved_side_count = 0;
        log::debug!("restore to side count {}", self.state.active_side_count);
        if !self.options.animation.is_animated() {
            self.finish_toggle();
            return;
        }

        self.slots
            .render(&self.state, &self.options.layout, self.viewport);
        self.request_visible_dimensions();
        let Some(target) = self.slots.center().map(|slot| slot.geometry) else {
            return;
        };
        for slot in self.slots.slots_mut() {
            if slot.is_center {
                if let Some(geometry) = maximized {
                    slot.geometry = geometry;
                }
            } else {
                slot.fade = 0.0;
            }
        }
        prepare_center(self.slots.slots_mut(), target);
        self.sink.begin_window(self.slots.len());
        self.begin_animation(AnimationKind::Restore, Phase::Restoring, now);
    }

    fn begin_animation(&mut self, kind: AnimationKind, phase: Phase, now: Instant) {
        let animation = &self.options.animation;
        self.runner = Some(AnimationRunner::with_start_time(
            now,
            kind,
            animation.duration(),
            animation.easing,
        ));
        self.phase = phase;
        self.state.animation_running = true;
        self.present();
    }

    /// Complete the transition that just reached progress 1, then start the
    /// oldest queued move.
    pub(super) fn settle(&mut self, now: Instant) {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.state.animation_running = false;
        if self.config_dirty {
            self.config_dirty = false;
            self.refresh_side_count();
        }

        match phase {
            Phase::Sliding(direction) => self.finish_move(direction),
            Phase::Maximizing | Phase::Restoring => self.finish_toggle(),
            Phase::Idle => self.render(),
        }

        if let Some(direction) = self.state.pending_moves.pop_front() {
            log::debug!(
                "dequeued move {direction:?} ({} left)",
                self.state.pending_moves.len()
            );
            self.start_move(direction, now);
        }
    }

    fn finish_move(&mut self, direction: Direction) {
        self.state.center_index =
            direction.step(self.state.center_index, self.state.image_count());
        self.render();
        log::debug!("settled at index {}", self.state.center_index);
        self.events
            .push(CarouselEvent::CenterSelected(self.state.center_index));
    }

    fn finish_toggle(&mut self) {
        self.render();
        let maximized = self.state.is_maximized();
        log::debug!("maximize settled (maximized: {maximized})");
        self.events.push(CarouselEvent::MaximizeChanged { maximized });
    }

    /// Home/End: jump without animation; ignored mid-transition.
    pub(super) fn jump_to(&mut self, index: usize) {
        if self.state.image_count() == 0 {
            return;
        }
        if self.state.animation_running {
            log::debug!("jump to {index} ignored: {:?} in progress", self.phase);
            return;
        }
        self.state.center_index = index;
        self.render();
        self.events.push(CarouselEvent::CenterSelected(index));
    }
}
