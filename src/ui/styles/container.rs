// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Drop zone surface. A hovered file highlights the border and tints the
/// background with the primary color.
pub fn drop_zone(theme: &Theme, dragging: bool) -> container::Style {
    let palette_ext = theme.extended_palette();

    let (background, border_color, border_width) = if dragging {
        (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_500,
            border::WIDTH_MD,
        )
    } else {
        let base = palette_ext.background.weak.color;
        (
            Color { a: opacity::SURFACE, ..base },
            palette_ext.background.strong.color,
            border::WIDTH_SM,
        )
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Panel replacing the drop zone while an upload error is shown.
pub fn error_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
