// SPDX-License-Identifier: MPL-2.0
//! Centralized slider styles.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Theme};

/// Style for the reveal slider: a thin divider-like handle on a neutral rail.
pub fn reveal(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_color = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        slider::Status::Active => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(palette::GRAY_400),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Rectangle {
                width: 6,
                border_radius: 3.0.into(),
            },
            background: Background::Color(handle_color),
            border_width: 1.0,
            border_color: palette::GRAY_700,
        },
    }
}
