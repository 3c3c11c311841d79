// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button ("Add images").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
        button::Status::Disabled => return button::Style::default(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn hovered_button_is_lighter() {
        let style = primary(&Theme::Dark, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_400))
        );
    }
}
