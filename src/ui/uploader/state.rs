// SPDX-License-Identifier: MPL-2.0
//! Drag, error and timing state of the uploader.

use crate::config::DEFAULT_ERROR_DISPLAY_MS;
use crate::error::UploadError;
use std::time::Duration;

/// How long the error panel stays visible before it dismisses itself.
///
/// # Example
///
/// ```
/// use iced_dropzone::ui::uploader::ErrorDisplayDuration;
///
/// assert_eq!(ErrorDisplayDuration::default().millis(), 400);
/// assert_eq!(ErrorDisplayDuration::from_millis(Some(12_000)).millis(), 12_000);
/// assert_eq!(ErrorDisplayDuration::from_millis(None).millis(), 400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDisplayDuration(u64);

impl ErrorDisplayDuration {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Uses the configured value, or the default when none is given.
    #[must_use]
    pub fn from_millis(millis: Option<u64>) -> Self {
        millis.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ErrorDisplayDuration {
    fn default() -> Self {
        Self(DEFAULT_ERROR_DISPLAY_MS)
    }
}

/// Tracks files hovering over the window.
///
/// The platform reports one hover event and one drop event per file. The
/// hover count lets the uploader keep the first file of a drop and skip the
/// others.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    is_dragging: bool,
    hovered_files: usize,
    skipped_drops: usize,
}

impl DragState {
    /// Registers a hovered file.
    pub fn enter(&mut self) {
        self.is_dragging = true;
        self.hovered_files += 1;
    }

    /// Hovered files left the window without being dropped.
    pub fn leave(&mut self) {
        self.is_dragging = false;
        self.hovered_files = 0;
        self.skipped_drops = 0;
    }

    /// Registers a dropped file and reports whether it should be processed.
    ///
    /// Only the first file of a drop is processed. The file count of a drop
    /// comes from the hover events before it, which winit sends on X11,
    /// Windows and macOS. A drop that was not preceded by a hover
    /// counts as a single-file drop, so on a platform that skips hover events
    /// every file of a multi-file drop is processed.
    pub fn take_drop(&mut self) -> bool {
        if self.is_dragging {
            self.is_dragging = false;
            self.skipped_drops = self.hovered_files.saturating_sub(1);
            self.hovered_files = 0;
            true
        } else if self.skipped_drops > 0 {
            self.skipped_drops -= 1;
            false
        } else {
            true
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

/// Transient upload error.
///
/// Each activation gets a new generation number, so a dismiss timer armed for
/// an earlier activation cannot clear a later one.
#[derive(Debug, Clone, Default)]
pub struct ErrorState {
    error: Option<UploadError>,
    generation: u64,
}

impl ErrorState {
    /// Shows `error`. Returns the generation to arm a dismiss timer with when
    /// the state just became active, `None` if an error was already showing
    /// (the message is replaced, the running timer is kept).
    pub fn raise(&mut self, error: UploadError) -> Option<u64> {
        let was_active = self.is_active();
        self.error = Some(error);
        if was_active {
            None
        } else {
            self.generation += 1;
            Some(self.generation)
        }
    }

    /// Starts a new generation for the active error, invalidating timers armed
    /// before. Returns `None` when no error is showing.
    pub fn rearm(&mut self) -> Option<u64> {
        if self.is_active() {
            self.generation += 1;
            Some(self.generation)
        } else {
            None
        }
    }

    /// Clears the error if `generation` is still current.
    ///
    /// Returns `true` when the error was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.is_active() && generation == self.generation {
            self.error = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// Message shown in the panel, empty when inactive.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}
