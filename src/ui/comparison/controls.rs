// SPDX-License-Identifier: MPL-2.0
//! Comparison controls: reveal slider, zoom steps, and pair navigation.

use crate::i18n::fluent::I18n;
use crate::ui::comparison::component::{Message, State};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, slider, Column, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let zoom_out_button = button(Text::new(ctx.i18n.tr("comparison-zoom-out")))
        .on_press_maybe(state.zoom().can_zoom_out().then_some(Message::ZoomOut))
        .padding([6, 12])
        .style(styles::button::secondary);

    let zoom_in_button = button(Text::new(ctx.i18n.tr("comparison-zoom-in")))
        .on_press_maybe(state.zoom().can_zoom_in().then_some(Message::ZoomIn))
        .padding([6, 12])
        .style(styles::button::secondary);

    let magnification_label = Text::new(ctx.i18n.tr_args(
        "comparison-magnification",
        &[("level", state.zoom().level().to_string())],
    ))
    .size(typography::CAPTION);

    let reveal_slider = slider(0..=100u8, state.reveal().value(), Message::RevealChanged)
        .step(1u8)
        .style(styles::slider::reveal)
        .width(Length::Fill);

    let reveal_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(zoom_out_button)
        .push(magnification_label)
        .push(zoom_in_button)
        .push(reveal_slider);

    let previous_button = button(Text::new(ctx.i18n.tr("comparison-previous")))
        .on_press_maybe(state.can_navigate().then_some(Message::PreviousPair))
        .padding([6, 12])
        .style(styles::button::primary);

    let next_button = button(Text::new(ctx.i18n.tr("comparison-next")))
        .on_press_maybe(state.can_navigate().then_some(Message::NextPair))
        .padding([6, 12])
        .style(styles::button::primary);

    let position_label = match state.pair_position() {
        Some((index, total)) => Text::new(ctx.i18n.tr_args(
            "comparison-pair-position",
            &[
                ("index", index.to_string()),
                ("total", total.to_string()),
            ],
        )),
        None => Text::new(String::new()),
    }
    .size(typography::CAPTION);

    let navigation_row = Row::new()
        .align_y(Vertical::Center)
        .push(previous_button)
        .push(Space::with_width(Length::Fill))
        .push(position_label)
        .push(Space::with_width(Length::Fill))
        .push(next_button);

    Column::new()
        .spacing(spacing::SM)
        .push(reveal_row)
        .push(navigation_row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext { i18n: &i18n }, &state);
    }
}
