//! Memoizing image-dimension cache.
//!
//! Decoding images is the host's job. The carousel only needs natural
//! dimensions (for in-slot placement and the maximize guard), so it keeps a
//! per-instance cache keyed by URL. Unknown URLs are queued as requests; the
//! host drains the queue, loads the images however it likes, and reports
//! each outcome back. Results may arrive at any time, including after the
//! slot has already been painted.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::layout::Dimensions;

/// An image whose dimensions could not be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    /// URL of the image.
    pub url: String,
    /// Why resolution failed.
    pub reason: String,
}

impl ResolutionFailure {
    /// Failure for `url` with a human-readable reason.
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.reason)
    }
}

impl std::error::Error for ResolutionFailure {}

/// Cached state of one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Requested, no answer yet.
    Pending,
    /// Natural dimensions are known.
    Loaded(Dimensions),
    /// The host reported a failure; dimensions stay unknown.
    Failed,
}

/// URL → dimensions cache with an outbound request queue.
#[derive(Debug, Default)]
pub struct DimensionCache {
    entries: FxHashMap<String, Resolution>,
    requests: Vec<String>,
}

impl DimensionCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Known dimensions for `url`, queueing a request the first time the
    /// URL is seen.
    pub fn request(&mut self, url: &str) -> Option<Dimensions> {
        match self.entries.get(url) {
            Some(Resolution::Loaded(dims)) => Some(*dims),
            Some(Resolution::Pending | Resolution::Failed) => None,
            None => {
                let _ = self.entries.insert(url.to_owned(), Resolution::Pending);
                self.requests.push(url.to_owned());
                None
            }
        }
    }

    /// Known dimensions for `url` without queueing anything.
    #[must_use]
    pub fn dimensions(&self, url: &str) -> Option<Dimensions> {
        match self.entries.get(url) {
            Some(Resolution::Loaded(dims)) => Some(*dims),
            _ => None,
        }
    }

    /// Cached state of `url`, if it was ever requested.
    #[must_use]
    pub fn status(&self, url: &str) -> Option<Resolution> {
        self.entries.get(url).copied()
    }

    /// Record the outcome of loading `url`.
    ///
    /// Returns `true` if the cached state changed.
    pub fn complete(
        &mut self,
        url: &str,
        result: Result<Dimensions, ResolutionFailure>,
    ) -> bool {
        let resolution = match result {
            Ok(dims) => Resolution::Loaded(dims),
            Err(e) => {
                log::warn!("image resolution failed: {e}");
                Resolution::Failed
            }
        };
        self.requests.retain(|r| r != url);
        self.entries.insert(url.to_owned(), resolution) != Some(resolution)
    }

    /// Drain the URLs waiting to be loaded, oldest first.
    pub fn take_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }

    /// Number of URLs requested but not yet answered.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|r| matches!(r, Resolution::Pending))
            .count()
    }
}
