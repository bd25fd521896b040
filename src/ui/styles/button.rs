// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for primary buttons (main actions).
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
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Disabled => disabled(),
    }
}

/// Style for secondary buttons (zoom steps, auxiliary actions).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.palette().text;
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.15,
                ..palette::GRAY_400
            })),
            text_color: base_text,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: 0.3,
                ..palette::GRAY_400
            })),
            text_color: base_text,
            border: Border {
                color: palette::GRAY_700,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Disabled => disabled(),
    }
}

/// Style for the selected entry in a group (active screen, active language).
pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_700)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::DISABLED,
            ..palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: Color {
                a: opacity::DISABLED,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
