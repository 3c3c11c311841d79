// SPDX-License-Identifier: MPL-2.0
//! Drag-and-drop / click-to-browse image uploader.
//!
//! The uploader validates the declared type of a dropped or picked file
//! against the accepted extensions, encodes accepted files as base64 data
//! URLs, previews the latest one and reports it to the host through
//! [`Event::ImageUploaded`]. Rejected files show a transient error panel.
//!
//! # Usage
//!
//! ```ignore
//! let mut uploader = uploader::State::new(
//!     AcceptedFormats::new(["jpg", "jpeg", "png"]),
//!     ErrorDisplayDuration::from_millis(Some(2_000)),
//! );
//!
//! let (event, task) = uploader.update(message);
//! if let uploader::Event::ImageUploaded(image) = event {
//!     // image.file, image.data_url
//! }
//! ```

mod component;
mod state;
mod view;

pub use component::{Event, Message, Preview, State, UploadedImage};
pub use state::{DragState, ErrorDisplayDuration, ErrorState};
pub use view::view;
