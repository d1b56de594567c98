// SPDX-License-Identifier: MPL-2.0
//! Intake views: drop zone, preview card, file-info grid, submit control,
//! and the full-window loading overlay.

use super::{Message, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, progress_bar, Column, Container, Image, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the intake screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("intake-title"))
        .size(typography::TITLE_LG)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.palette().text),
        });

    let zone: Element<'a, Message> = if state.has_file() {
        armed_zone(state, i18n)
    } else {
        empty_zone(state, i18n)
    };

    let submit_label = Text::new(i18n.tr("submit-button")).size(typography::BODY_LG);
    let submit = button(submit_label)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press_maybe(state.submit_enabled().then_some(Message::SubmitRequested));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(zone)
        .push(submit);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

/// The drop zone before a file is accepted: the instruction label plus a
/// browse hint, swapping to the drag-hover wording while a file hangs
/// over the window.
fn empty_zone<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let label_key = if state.drag_hover() {
        "drop-zone-hover"
    } else {
        "drop-zone-label"
    };

    let label = Text::new(i18n.tr(label_key))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    // The whole zone is the click target; a caption spells it out instead
    // of a nested button, so a click cannot fire twice.
    let browse_hint = Text::new(i18n.tr("browse-button"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.6,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(label)
        .push(browse_hint);

    let zone = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(state.drag_hover(), false));

    mouse_area(zone).on_press(Message::BrowseRequested).into()
}

/// The drop zone once a preview is up: thumbnail, ready label, metadata
/// grid, and the remove control.
fn armed_zone<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if let Some(preview) = state.preview() {
        let thumbnail = Image::new(preview.handle.clone())
            .width(Length::Fixed(sizing::PREVIEW_MAX_EDGE))
            .height(Length::Fixed(sizing::PREVIEW_MAX_EDGE * 0.75));
        content = content.push(thumbnail);
    }

    content = content.push(
        Text::new(i18n.tr("drop-zone-ready"))
            .size(typography::BODY_LG)
            .color(palette::PRIMARY_500),
    );

    if state.selection().is_some() {
        content = content.push(file_info_grid(state, i18n));
    }

    let remove = button(Text::new(i18n.tr("remove-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::subtle)
        .on_press(Message::RemoveRequested);
    content = content.push(remove);

    Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .style(styles::container::drop_zone(state.drag_hover(), true))
        .into()
}

/// Two-column metadata grid: name/size on the first row, type/date on the
/// second.
fn file_info_grid<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(file) = state.selection() else {
        return Column::new().into();
    };

    let date_format = i18n.tr("date-format");

    let cell = |label: String, value: String| {
        Row::new()
            .spacing(spacing::XS)
            .push(
                Text::new(label)
                    .size(typography::BODY)
                    .color(palette::GRAY_700),
            )
            .push(Text::new(value).size(typography::BODY))
    };

    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(cell(i18n.tr("file-info-name"), file.name.clone()))
                .push(cell(i18n.tr("file-info-size"), file.size_label())),
        )
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(cell(i18n.tr("file-info-type"), file.kind.mime().to_string()))
                .push(cell(
                    i18n.tr("file-info-modified"),
                    file.modified_label(&date_format),
                )),
        )
        .into()
}

/// Full-window loading overlay with the simulated progress bar.
///
/// Stacked above the intake screen by the application while a handover is
/// in flight.
pub fn loading_overlay<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let bar = progress_bar(0.0..=100.0, state.progress().rendered_width());

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("loading-title")).size(typography::TITLE))
        .push(
            Text::new(i18n.tr("loading-subtitle"))
                .size(typography::BODY)
                .color(Color {
                    a: 0.7,
                    ..palette::WHITE
                }),
        )
        .push(
            Container::new(bar)
                .width(Length::Fixed(sizing::PROGRESS_BAR_WIDTH))
                .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
        );

    let indicator = Container::new(card)
        .padding(spacing::XL)
        .style(styles::overlay::indicator(radius::LG));

    Container::new(indicator)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::backdrop)
        .into()
}
