// SPDX-License-Identifier: MPL-2.0
//! Uploader component: state, messages and the update logic.

use super::state::{DragState, ErrorDisplayDuration, ErrorState};
use crate::error::{Error, UploadError};
use crate::media::{read_as_data_url, AcceptedFormats, DataUrl, EncodedImage, PickedFile};
use iced::task::Handle;
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

/// Messages handled by the uploader.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file is dragged over the window.
    FileHovered,
    /// Dragged files left the window.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// "Add images" was pressed.
    BrowseRequested,
    /// Result of the file dialog; `None` when cancelled.
    FilePicked(Option<PickedFile>),
    /// Background read of an accepted file finished.
    DecodeCompleted(Result<EncodedImage, Error>),
    /// Dismiss timer of the given error generation elapsed.
    ErrorExpired(u64),
}

/// Events propagated to the host.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A file passed validation and was encoded. Emitted once per file.
    ImageUploaded(UploadedImage),
}

/// Accepted file together with its data-URL encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file: PickedFile,
    pub data_url: DataUrl,
}

/// Most recently decoded image.
#[derive(Debug, Clone)]
pub struct Preview {
    data_url: DataUrl,
    handle: image::Handle,
}

impl Preview {
    fn new(data_url: DataUrl, bytes: Vec<u8>) -> Self {
        Self {
            data_url,
            handle: image::Handle::from_bytes(bytes),
        }
    }

    #[must_use]
    pub fn data_url(&self) -> &DataUrl {
        &self.data_url
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

/// Uploader state. Dropping it cancels a pending error dismiss timer.
#[derive(Debug)]
pub struct State {
    accepted_formats: AcceptedFormats,
    error_display: ErrorDisplayDuration,
    drag: DragState,
    error: ErrorState,
    preview: Option<Preview>,
    dismiss_timer: Option<Handle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AcceptedFormats::default(), ErrorDisplayDuration::default())
    }
}

impl State {
    #[must_use]
    pub fn new(accepted_formats: AcceptedFormats, error_display: ErrorDisplayDuration) -> Self {
        Self {
            accepted_formats,
            error_display,
            drag: DragState::default(),
            error: ErrorState::default(),
            preview: None,
            dismiss_timer: None,
        }
    }

    #[must_use]
    pub fn accepted_formats(&self) -> &AcceptedFormats {
        &self.accepted_formats
    }

    #[must_use]
    pub fn error_display(&self) -> ErrorDisplayDuration {
        self.error_display
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn error(&self) -> &ErrorState {
        &self.error
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Whether an error dismiss timer is armed.
    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.dismiss_timer.is_some()
    }

    /// Changes the error display duration. A showing error restarts its
    /// timer with the new duration.
    pub fn set_error_display(&mut self, duration: ErrorDisplayDuration) -> Task<Message> {
        if duration == self.error_display {
            return Task::none();
        }
        self.error_display = duration;
        match self.error.rearm() {
            Some(generation) => self.arm_dismiss_timer(generation),
            None => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::FileHovered => {
                if !self.drag.is_dragging() {
                    tracing::debug!("file drag entered");
                }
                self.drag.enter();
                (Event::None, Task::none())
            }
            Message::FilesHoveredLeft => {
                self.drag.leave();
                (Event::None, Task::none())
            }
            Message::FileDropped(path) => {
                if !self.drag.take_drop() {
                    tracing::debug!(file = %path.display(), "ignoring additional dropped file");
                    return (Event::None, Task::none());
                }
                if self.error.is_active() {
                    // Drop zone is hidden behind the error panel
                    tracing::debug!(file = %path.display(), "ignoring drop while error is shown");
                    return (Event::None, Task::none());
                }
                (Event::None, self.validate_and_decode(PickedFile::from_path(path)))
            }
            Message::BrowseRequested => (Event::None, self.open_file_dialog()),
            Message::FilePicked(Some(file)) => (Event::None, self.validate_and_decode(file)),
            Message::FilePicked(None) => (Event::None, Task::none()),
            Message::DecodeCompleted(Ok(encoded)) => {
                let EncodedImage {
                    file,
                    data_url,
                    bytes,
                } = encoded;
                tracing::info!(file = %file.path().display(), "image uploaded");
                self.preview = Some(Preview::new(data_url.clone(), bytes));
                (
                    Event::ImageUploaded(UploadedImage { file, data_url }),
                    Task::none(),
                )
            }
            Message::DecodeCompleted(Err(err)) => {
                tracing::warn!(error = %err, "failed to read file");
                let upload_error = match err {
                    Error::Upload(upload_error) => upload_error,
                    other => UploadError::ReadFailed(other.to_string()),
                };
                (Event::None, self.raise_error(upload_error))
            }
            Message::ErrorExpired(generation) => {
                if self.error.expire(generation) {
                    tracing::debug!("error panel dismissed");
                    self.dismiss_timer = None;
                }
                (Event::None, Task::none())
            }
        }
    }

    fn validate_and_decode(&mut self, file: PickedFile) -> Task<Message> {
        if self.accepted_formats.accepts(&file) {
            tracing::debug!(file = %file.path().display(), mime = ?file.mime_type(), "file accepted");
            Task::perform(read_as_data_url(file), Message::DecodeCompleted)
        } else {
            tracing::info!(
                file = %file.path().display(),
                mime = ?file.mime_type(),
                accepted = %self.accepted_formats.accept_filter(),
                "rejected file with unsupported type"
            );
            self.raise_error(UploadError::UnsupportedFormat)
        }
    }

    fn raise_error(&mut self, error: UploadError) -> Task<Message> {
        match self.error.raise(error) {
            Some(generation) => self.arm_dismiss_timer(generation),
            None => Task::none(),
        }
    }

    fn arm_dismiss_timer(&mut self, generation: u64) -> Task<Message> {
        let delay = self.error_display.as_duration();
        let (task, handle) =
            Task::perform(dismiss_after(delay, generation), Message::ErrorExpired).abortable();
        // Replacing the handle aborts the previous timer
        self.dismiss_timer = Some(handle.abort_on_drop());
        task
    }

    fn open_file_dialog(&self) -> Task<Message> {
        let extensions = self.accepted_formats.extensions().to_vec();
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .add_filter("Images", extensions.as_slice())
                    .pick_file()
                    .await
                    .map(PickedFile::from)
            },
            Message::FilePicked,
        )
    }
}

/// Resolves with `generation` once `delay` has elapsed.
async fn dismiss_after(delay: Duration, generation: u64) -> u64 {
    tokio::time::sleep(delay).await;
    generation
}
