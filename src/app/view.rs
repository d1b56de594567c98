// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen, then stacks the transient layers above it:
//! the loading overlay while a handover is in flight, the lightbox while
//! open, and the banner area whenever notifications are visible.

use super::{App, Message, Screen};
use crate::ui::gallery;
use crate::ui::intake;
use crate::ui::notifications::Toast;
use iced::widget::Stack;
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let base: Element<'_, Message> = match app.screen {
        Screen::Intake => intake::view(&app.intake, &app.i18n).map(Message::Intake),
        Screen::Results => gallery::view(&app.gallery, &app.i18n).map(Message::Gallery),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if app.intake.is_submitting() {
        layers = layers.push(
            intake::loading_overlay(&app.intake, &app.i18n).map(Message::Intake),
        );
    }

    if app.screen == Screen::Results && app.gallery.is_modal_open() {
        layers = layers.push(
            gallery::modal_overlay(&app.gallery, &app.i18n).map(Message::Gallery),
        );
    }

    if app.notifications.visible_count() > 0 {
        layers = layers.push(
            Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification),
        );
    }

    layers.into()
}
