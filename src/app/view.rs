// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the optional status line, and the active screen.

use super::{App, Message, Screen};
use crate::ui::analysis;
use crate::ui::comparison::component;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar;
use crate::ui::settings;
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active: app.screen,
        pair_position: app.comparison.pair_position(),
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Comparison => app
            .comparison
            .view(component::ViewEnv { i18n: &app.i18n })
            .map(Message::Comparison),
        Screen::Analysis => analysis::view(analysis::ViewContext {
            i18n: &app.i18n,
            pair: app.comparison.current_pair(),
            can_navigate: app.comparison.can_navigate(),
        })
        .map(Message::Analysis),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            lens_diameter: app.comparison.lens_diameter().value(),
        })
        .map(Message::Settings),
    };

    let mut column = Column::new().push(navbar_view);

    if let Some(status) = &app.status {
        let status_text = Text::new(app.i18n.tr_args(status.key, &status.args))
            .size(typography::CAPTION);
        column = column.push(
            Container::new(status_text)
                .padding([spacing::XS, spacing::MD])
                .width(Length::Fill)
                .style(styles::container::status_error),
        );
    }

    column
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
