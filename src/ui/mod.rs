// SPDX-License-Identifier: MPL-2.0
//! User interface: the uploader component and its styling.

pub mod design_tokens;
pub mod styles;
pub mod uploader;
