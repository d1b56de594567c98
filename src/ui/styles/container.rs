// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Generic panel surface derived from the active theme background.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Drop-zone surface. The accent tracks the widget's visual state:
/// default, drag-hover (`dragover`), and armed (`has-file`).
pub fn drop_zone(drag_hover: bool, has_file: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;
        let accent = if has_file {
            palette::PRIMARY_500
        } else if drag_hover {
            palette::PRIMARY_400
        } else {
            palette::GRAY_400
        };

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: accent,
                width: if drag_hover || has_file {
                    border::WIDTH_LG
                } else {
                    border::WIDTH_MD
                },
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Result-card surface; `lifted` switches to the hover elevation.
pub fn card(lifted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: if lifted {
                    palette::PRIMARY_400
                } else {
                    palette::GRAY_200
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if lifted { shadow::LG } else { shadow::MD },
            ..Default::default()
        }
    }
}
