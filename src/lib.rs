// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Layout and animation engine for a sliding image carousel.
//!
//! A fixed-size viewport shows one center image flanked symmetrically by
//! shrinking side images. Keyboard, wheel and click input slide the strip
//! one image at a time; clicking the center image maximizes it to fill the
//! viewport and clicking again restores it.
//!
//! # Key entry points
//!
//! - [`Carousel`] - the state machine; feed it [`CarouselCommand`]s and
//!   frame ticks, drain [`CarouselEvent`]s
//! - [`layout::compute_layout`] - pure slot geometry
//! - [`InputProcessor`] - raw key/wheel/pointer events to commands
//! - [`VisualSink`] - where slot updates go
//! - [`Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's event loop. A command either settles
//! synchronously or starts an [`animation::AnimationRunner`], which the host
//! advances with [`Carousel::tick`] once per frame until it reports no more
//! frames are needed. Image decoding stays with the host: the carousel asks
//! for natural dimensions through [`Carousel::take_image_requests`] and is
//! told about them through [`Carousel::image_resolved`].

pub mod animation;
pub mod carousel;
pub mod error;
pub mod input;
pub mod layout;
pub mod options;
pub mod resolver;
pub mod sink;
pub mod slots;

pub use carousel::{
    Carousel, CarouselCommand, CarouselEvent, CarouselState, ConfigChange,
    Direction, Phase,
};
pub use error::CarouselError;
pub use input::{InputContext, InputEvent, InputProcessor, KeyAction};
pub use layout::{Dimensions, SlotGeometry, Viewport};
pub use options::Options;
pub use resolver::{DimensionCache, Resolution, ResolutionFailure};
pub use sink::{NullSink, RecordingSink, SlotVisual, VisualSink};
