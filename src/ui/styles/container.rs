// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for the navbar strip at the top of the window.
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.08,
            ..theme.palette().text
        })),
        ..container::Style::default()
    }
}

/// Style for the status line shown after a failed manifest load.
pub fn status_error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// Style for grouped panels (analysis metric blocks).
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.05,
            ..theme.palette().text
        })),
        border: Border {
            color: Color {
                a: 0.2,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
