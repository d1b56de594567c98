// SPDX-License-Identifier: MPL-2.0
//! Gallery views: the result-card list and the lightbox overlay.

use super::{modal, Message, State};
use crate::i18n::I18n;
use crate::media::AnalysisRecord;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, mouse_area, scrollable, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Renders the results screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("results-title")).size(typography::TITLE_LG);

    let count = state.records().len().to_string();
    let count = i18n.tr_with_args("results-count", &[("count", count.as_str())]);
    let subtitle = Text::new(count)
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let back = button(Text::new(i18n.tr("results-back")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::BackRequested);

    let header = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(title)
                .push(subtitle)
                .width(Length::Fill),
        )
        .push(back);

    let body: Element<'a, Message> = if state.records().is_empty() {
        Container::new(
            Text::new(i18n.tr("results-empty"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        let mut cards = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        for (index, record) in state.records().iter().enumerate() {
            cards = cards.push(card(state, i18n, index, record));
        }

        scrollable(cards)
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .height(Length::Fill)
            .into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}

/// One result card. Unrevealed cards hold their slot as an empty
/// placeholder until the staggered reveal promotes them.
fn card<'a>(
    state: &'a State,
    i18n: &'a I18n,
    index: usize,
    record: &'a AnalysisRecord,
) -> Element<'a, Message> {
    if !state.is_revealed(index) {
        return Container::new(Column::new())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into();
    }

    let (translate_y, _scale) = state.card_transform(index);
    let lifted = state.hovered() == Some(index);

    let picture = mouse_area(
        Image::new(Handle::from_path(&record.image))
            .width(Length::Fixed(sizing::CARD_WIDTH - f32::from(spacing::MD) * 2.0))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT)),
    )
    .on_press(Message::CardClicked(index));

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(picture)
        .push(Text::new(record.title.as_str()).size(typography::BODY_LG));

    if let Some(description) = &record.description {
        content = content.push(
            Text::new(description.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    if let Some(confidence) = record.confidence {
        content = content.push(confidence_badge(state, i18n, index, confidence));
    }

    let surface = Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card(lifted));

    // The lift renders as a shrinking top inset: resting cards keep an
    // 8px inset, hovered cards give it up and sit higher.
    let top_inset = (8.0 + translate_y).max(0.0) as u16;

    mouse_area(Container::new(surface).padding([top_inset, 0]))
        .on_enter(Message::CardHovered(index))
        .on_exit(Message::CardUnhovered(index))
        .into()
}

/// The circular confidence badge; high-confidence badges breathe with the
/// pulse oscillation.
fn confidence_badge<'a>(
    state: &'a State,
    i18n: &'a I18n,
    index: usize,
    confidence: u8,
) -> Element<'a, Message> {
    let scale = if state.card_pulses(index) {
        state.pulse_scale()
    } else {
        1.0
    };
    let diameter = sizing::CONFIDENCE_BADGE * scale;

    let value = Text::new(format!("{confidence}%"))
        .size((f32::from(typography::BODY_LG) * scale) as u32)
        .color(palette::WHITE);

    let circle = Container::new(value)
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(palette::PRIMARY_500)),
            border: Border {
                radius: (diameter / 2.0).into(),
                ..Default::default()
            },
            text_color: Some(palette::WHITE),
            ..Default::default()
        });

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(circle)
        .push(
            Text::new(i18n.tr("confidence-label"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

/// The lightbox overlay. Only rendered while the modal is open; clicks on
/// the backdrop close it, clicks on the content are swallowed.
pub fn modal_overlay<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(current) = state.modal().current() else {
        return Column::new().into();
    };

    let picture = Image::new(Handle::from_path(&current.image))
        .width(Length::Fixed(sizing::MODAL_IMAGE_MAX_EDGE))
        .height(Length::Fixed(sizing::MODAL_IMAGE_MAX_EDGE * 0.75));

    let caption = Text::new(current.caption.as_str()).size(typography::BODY_LG);

    let close = button(Text::new(i18n.tr("modal-close")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Modal(modal::Message::Close));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(picture)
        .push(caption)
        .push(close);

    // Content clicks stop at the guard layer; only clicks landing on the
    // dimmed backdrop itself reach the close handler beneath it.
    let guarded_content = mouse_area(
        Container::new(content)
            .padding(spacing::LG)
            .style(styles::overlay::modal_content),
    )
    .on_press(Message::Modal(modal::Message::ContentClicked));

    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Modal(modal::Message::BackdropClicked));

    let content_layer = Container::new(guarded_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content_layer)
        .into()
}
