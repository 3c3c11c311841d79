// SPDX-License-Identifier: MPL-2.0
//! File handling for the uploader: file handles, declared MIME types,
//! accepted format lists and data-URL encoding.

pub mod data_url;
pub mod file;
pub mod formats;
pub mod mime;

pub use data_url::{read_as_data_url, DataUrl, EncodedImage};
pub use file::PickedFile;
pub use formats::AcceptedFormats;
