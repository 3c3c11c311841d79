// SPDX-License-Identifier: MPL-2.0
//! `iced_dropzone` is a drag-and-drop image uploader built with the Iced GUI framework.
//!
//! The [`ui::uploader`] component validates dropped or picked files against a
//! list of accepted image extensions, previews the accepted image and hands
//! its base64 data URL to the host. A small host application in [`app`] shows
//! the component in a window.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
