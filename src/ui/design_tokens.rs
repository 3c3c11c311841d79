// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the uploader views.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    /// Rendered width of the uploaded image preview.
    pub const PREVIEW_WIDTH: f32 = 200.0;

    /// Width of the drop zone and of the error panel.
    pub const DROP_ZONE_WIDTH: f32 = 320.0;

    /// Minimum height of the drop zone.
    pub const DROP_ZONE_HEIGHT: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Small title - "Add images" label
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Format list, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Idle drop zone
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop zone while a file hovers, error panel
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::XS * 3.0);
    }

    #[test]
    fn preview_fits_inside_drop_zone_width() {
        assert!(sizing::PREVIEW_WIDTH < sizing::DROP_ZONE_WIDTH);
    }
}
