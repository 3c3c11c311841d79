// SPDX-License-Identifier: MPL-2.0
//! Rendering of the uploader.
//!
//! States are exclusive and checked in order:
//! 1. An active error replaces everything with the error panel.
//! 2. Otherwise the drop zone is shown, styled by the drag state.
//! 3. A decoded image, if any, is rendered next to the drop zone.

use super::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the uploader.
pub fn view<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    if let Some(error) = state.error().error() {
        return error_panel(i18n.tr(error.i18n_key()));
    }

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(drop_zone(state, i18n));

    if let Some(preview) = state.preview() {
        let preview_image = image(preview.handle().clone()).width(Length::Fixed(sizing::PREVIEW_WIDTH));
        row = row.push(Container::new(preview_image).width(Length::Fixed(sizing::PREVIEW_WIDTH)));
    }

    row.into()
}

fn drop_zone<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let dragging = state.is_dragging();

    let add_button = button(Text::new(i18n.tr("uploader-add-images")).size(typography::TITLE_SM))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::BrowseRequested);

    let hint = Text::new(i18n.tr("uploader-drop-hint")).size(typography::BODY);

    let formats = state.accepted_formats().extensions().join(", ");
    let formats_caption = Text::new(
        i18n.tr_with_args("uploader-accepted-formats", &[("formats", formats.as_str())]),
    )
    .size(typography::CAPTION)
    .color(Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::GRAY_400
    });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(add_button)
        .push(hint)
        .push(formats_caption);

    Container::new(content)
        .width(Length::Fixed(sizing::DROP_ZONE_WIDTH))
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| styles::container::drop_zone(theme, dragging))
        .into()
}

fn error_panel<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fixed(sizing::DROP_ZONE_WIDTH))
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::error_panel)
        .into()
}
