// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level screen switching.
//!
//! Offers the three screens (comparison, analysis, settings) and shows the
//! current pair position when a set is loaded.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    /// 1-based pair position and total, when a set is loaded.
    pub pair_position: Option<(usize, usize)>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowComparison,
    ShowAnalysis,
    ShowSettings,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_SM);

    let screen_button = |key: &str, message: Message, screen: Screen| {
        let style = if ctx.active == screen {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(message)
            .padding([6, 12])
            .style(style)
    };

    let position_label = match ctx.pair_position {
        Some((index, total)) => Text::new(ctx.i18n.tr_args(
            "navbar-pair-position",
            &[
                ("index", index.to_string()),
                ("total", total.to_string()),
            ],
        )),
        None => Text::new(String::new()),
    }
    .size(typography::CAPTION);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::with_width(Length::Fixed(16.0)))
        .push(screen_button(
            "navbar-comparison",
            Message::ShowComparison,
            Screen::Comparison,
        ))
        .push(screen_button(
            "navbar-analysis",
            Message::ShowAnalysis,
            Screen::Analysis,
        ))
        .push(screen_button(
            "navbar-settings",
            Message::ShowSettings,
            Screen::Settings,
        ))
        .push(Space::with_width(Length::Fill))
        .push(position_label);

    Container::new(row)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Screen::Comparison,
            pair_position: Some((2, 3)),
        });
    }
}
