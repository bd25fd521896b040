// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and loupe size.

use crate::config::{MAX_LENS_DIAMETER, MIN_LENS_DIAMETER};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, slider, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current loupe diameter in logical pixels.
    pub lens_diameter: f32,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    LensDiameterChanged(f32),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("settings-language-label")));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let style = if ctx.i18n.current_locale() == locale {
            styles::button::selected
        } else {
            styles::button::secondary
        };

        language_column = language_column.push(
            button(Text::new(button_text))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([6, 12])
                .style(style),
        );
    }

    let lens_label = Text::new(ctx.i18n.tr_args(
        "settings-lens-label",
        &[("pixels", format!("{:.0}", ctx.lens_diameter))],
    ));

    let lens_slider = slider(
        MIN_LENS_DIAMETER..=MAX_LENS_DIAMETER,
        ctx.lens_diameter,
        Message::LensDiameterChanged,
    )
    .step(16.0)
    .width(Length::Fixed(280.0));

    let lens_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(lens_label)
        .push(lens_slider);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(title)
        .push(language_column)
        .push(lens_row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
