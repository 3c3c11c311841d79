// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Formats**: Extensions accepted when none are configured
//! - **Error display**: Auto-dismiss delay of the uploader error panel

// ==========================================================================
// Format Defaults
// ==========================================================================

/// Extensions accepted by the uploader when the host configures none.
pub const DEFAULT_ACCEPTED_FORMATS: &[&str] = &["jpg", "jpeg", "png"];

// ==========================================================================
// Error Display Defaults
// ==========================================================================

/// Default time the "invalid file" panel stays visible (in milliseconds).
pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 400;

/// Error display time used by the bundled demo host (in milliseconds).
pub const HOST_ERROR_DISPLAY_MS: u64 = 12_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formats_are_lowercase_without_dot() {
        for ext in DEFAULT_ACCEPTED_FORMATS {
            assert!(!ext.starts_with('.'));
            assert_eq!(*ext, ext.to_lowercase());
        }
    }

    #[test]
    fn widget_default_is_independent_of_host_default() {
        assert_eq!(DEFAULT_ERROR_DISPLAY_MS, 400);
        assert_ne!(DEFAULT_ERROR_DISPLAY_MS, HOST_ERROR_DISPLAY_MS);
    }
}
