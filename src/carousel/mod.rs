//! The carousel state machine.
//!
//! [`Carousel`] owns the navigation state, the live slot array, the running
//! animation and the dimension cache, and is the only thing that mutates
//! any of them. The host feeds it [`CarouselCommand`]s and frame ticks,
//! drains [`CarouselEvent`]s and answers image dimension requests; every
//! visual change is pushed to the [`VisualSink`] it was built with.
//!
//! All entry points take an explicit [`Instant`] variant (`execute_at`,
//! `tick`) so transitions can be driven deterministically.

pub mod command;
mod host;
mod state;
mod transitions;

pub use command::{CarouselCommand, CarouselEvent, ConfigChange, Direction};
pub use state::{CarouselState, Phase};
use web_time::Instant;

use crate::animation::{AnimationRunner, CenterGuard};
use crate::error::CarouselError;
use crate::layout::{place_image, Viewport};
use crate::options::Options;
use crate::resolver::DimensionCache;
use crate::sink::{SlotVisual, VisualSink};
use crate::slots::SlotRegistry;

/// Interactive image carousel bound to a [`VisualSink`].
pub struct Carousel<S: VisualSink> {
    /// Navigation state.
    state: CarouselState,
    /// Active configuration.
    options: Options,
    /// Drawing area.
    viewport: Viewport,
    /// Whether the host ever sized the component.
    sized: bool,
    /// Live slot array.
    slots: SlotRegistry,
    /// Current transition.
    phase: Phase,
    /// Timeline of the current transition.
    runner: Option<AnimationRunner>,
    /// Natural image dimensions by URL.
    dimensions: DimensionCache,
    /// Slot under the pointer.
    hovered: Option<usize>,
    /// Notifications not yet drained by the host.
    events: Vec<CarouselEvent>,
    /// Configuration changed mid-transition; rebuild at settle.
    config_dirty: bool,
    /// Presentation target.
    sink: S,
    /// Cleared by [`Carousel::detach`].
    attached: bool,
}

impl<S: VisualSink> Carousel<S> {
    /// Create an empty carousel drawing into `sink`.
    ///
    /// The viewport starts at the unsized default until the first
    /// [`CarouselCommand::Resize`].
    pub fn new(sink: S, options: Options) -> Result<Self, CarouselError> {
        options.validate()?;
        let viewport = Viewport::default_for(options.layout.side_image_count);
        Ok(Self {
            state: CarouselState::default(),
            options,
            viewport,
            sized: false,
            slots: SlotRegistry::new(),
            phase: Phase::Idle,
            runner: None,
            dimensions: DimensionCache::new(),
            hovered: None,
            events: Vec::new(),
            config_dirty: false,
            sink,
            attached: true,
        })
    }

    /// Execute a command now.
    pub fn execute(&mut self, cmd: CarouselCommand) -> Result<(), CarouselError> {
        self.execute_at(cmd, Instant::now())
    }

    /// Execute a command, starting any resulting animation at `now`.
    ///
    /// A declined command returns `Err` and leaves the carousel unchanged.
    /// After [`detach`](Self::detach) every command is a no-op.
    pub fn execute_at(
        &mut self,
        cmd: CarouselCommand,
        now: Instant,
    ) -> Result<(), CarouselError> {
        if !self.attached {
            log::trace!("ignoring {cmd:?} on detached carousel");
            return Ok(());
        }
        match cmd {
            CarouselCommand::Move(direction) => {
                self.start_move(direction, now);
                Ok(())
            }
            CarouselCommand::Click { slot } => self.click(slot, now),
            CarouselCommand::ToggleMaximize => {
                self.toggle_maximize(now);
                Ok(())
            }
            CarouselCommand::Resize { width, height } => self.resize(width, height),
            CarouselCommand::KeyHome => {
                self.jump_to(0);
                Ok(())
            }
            CarouselCommand::KeyEnd => {
                self.jump_to(self.state.image_count().saturating_sub(1));
                Ok(())
            }
            CarouselCommand::ConfigChange(change) => self.apply_config(change),
            CarouselCommand::Hover(slot) => {
                self.hovered = slot;
                self.present();
                Ok(())
            }
        }
    }

    /// Advance the running transition to `now`.
    ///
    /// Applies one frame, settles the transition when it completes, and
    /// starts the next queued move. Returns `true` while more frames are
    /// needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.attached {
            return false;
        }
        let guard = self.center_guard();
        let Some(runner) = self.runner.as_mut() else {
            return false;
        };
        let raw_t = runner.progress(now);
        let done = runner.apply(self.slots.slots_mut(), raw_t, &guard);
        self.present();
        if done {
            self.runner = None;
            self.settle(now);
        }
        self.runner.is_some()
    }

    /// Take the notifications emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tear the carousel down: later commands, frames and image results
    /// are ignored.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        log::debug!("carousel detached");
        self.attached = false;
        self.runner = None;
        self.phase = Phase::Idle;
        self.state.animation_running = false;
        self.state.pending_moves.clear();
        self.slots.clear();
        self.sink.clear();
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Navigation state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Live slot array.
    #[must_use]
    pub fn slots(&self) -> &SlotRegistry {
        &self.slots
    }

    /// Current transition.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.animation_running
    }

    /// Whether [`detach`](Self::detach) has not been called.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Active configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current drawing area.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Slot under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Dimension cache.
    #[must_use]
    pub fn dimensions(&self) -> &DimensionCache {
        &self.dimensions
    }

    /// Presentation target.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable presentation target.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ── Presentation ─────────────────────────────────────────────────────

    /// Rebuild the slot array from the current state and push it out.
    fn render(&mut self) {
        self.slots
            .render(&self.state, &self.options.layout, self.viewport);
        self.request_visible_dimensions();
        if self.slots.is_empty() {
            self.sink.clear();
            return;
        }
        self.sink.begin_window(self.slots.len());
        self.present();
    }

    /// Queue dimension requests for every URL in the window.
    fn request_visible_dimensions(&mut self) {
        for slot in self.slots.slots() {
            let _ = self.dimensions.request(&slot.url);
        }
    }

    /// Push every slot's current state to the sink.
    fn present(&mut self) {
        let maximized = self.state.is_maximized();
        let layout = &self.options.layout;
        let display = &self.options.display;
        for slot in self.slots.slots() {
            let hovered = self.hovered == Some(slot.position);
            let natural = self.dimensions.dimensions(&slot.url);
            let visual = SlotVisual {
                position: slot.position,
                source_index: slot.source_index,
                url: &slot.url,
                x: slot.geometry.x,
                width: slot.geometry.width,
                height: slot.geometry.height,
                opacity: slot.fade
                    * display.base_opacity(slot.is_center, hovered, maximized),
                visible: slot.visible,
                is_center: slot.is_center,
                image: place_image(
                    natural,
                    slot.geometry,
                    layout.padding_x,
                    layout.padding_y,
                ),
            };
            self.sink.present(&visual);
        }
    }

    /// Guard inputs for the current center slot, re-read every frame.
    fn center_guard(&self) -> CenterGuard {
        CenterGuard {
            natural: self
                .slots
                .center()
                .and_then(|slot| self.dimensions.dimensions(&slot.url)),
            padding_x: self.options.layout.padding_x,
            padding_y: self.options.layout.padding_y,
        }
    }
}

impl<S: VisualSink + std::fmt::Debug> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("phase", &self.phase)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
