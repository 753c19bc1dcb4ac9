//! Crate-level error types.

use std::fmt;

use crate::resolver::ResolutionFailure;

/// Errors produced by the carousel crate.
///
/// Every variant describes a declined operation: the carousel state that
/// existed before the call is left untouched.
#[derive(Debug)]
pub enum CarouselError {
    /// A configuration value is outside its accepted range.
    Configuration {
        /// Name of the offending option.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: String,
    },
    /// A center index does not address an image in the current list.
    Index {
        /// Requested index.
        index: usize,
        /// Number of images available.
        len: usize,
    },
    /// A resize target with a zero dimension.
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The operation cannot be applied while a transition is in flight.
    AnimationInProgress,
    /// The image resolution service could not determine image dimensions.
    ///
    /// The carousel never returns this itself: a failure reported through
    /// [`Carousel::image_resolved`](crate::Carousel::image_resolved) only
    /// leaves the slot without dimensions. It lets host loaders that
    /// produce [`ResolutionFailure`] propagate it with `?` alongside the
    /// other carousel errors.
    ImageResolution(ResolutionFailure),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl CarouselError {
    /// Shorthand for a [`CarouselError::Configuration`] value.
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { field, reason } => {
                write!(f, "invalid configuration for `{field}`: {reason}")
            }
            Self::Index { index, len } => {
                write!(f, "index {index} out of range for {len} images")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::AnimationInProgress => {
                write!(f, "operation declined while an animation is running")
            }
            Self::ImageResolution(e) => write!(f, "image resolution failed: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageResolution(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResolutionFailure> for CarouselError {
    fn from(e: ResolutionFailure) -> Self {
        Self::ImageResolution(e)
    }
}

impl From<std::io::Error> for CarouselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
