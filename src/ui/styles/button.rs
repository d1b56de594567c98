// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (armed submit, browse, back-to-intake).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::LG,
            snap: true,
        },
        button::Status::Disabled => disarmed(),
    }
}

/// Disarmed submit button: the muted gray the form shows until a validated
/// selection is present.
#[must_use]
pub fn disarmed() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::MUTED_500)),
        text_color: WHITE,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button for inline dismiss/close controls.
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let wash = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => 0.0,
    };

    button::Style {
        background: (wash > 0.0).then(|| Background::Color(Color { a: wash, ..BLACK })),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_status_is_the_disarmed_gray() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::MUTED_500))
        );
    }

    #[test]
    fn active_status_is_the_armed_green() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }
}
