// SPDX-License-Identifier: MPL-2.0
//! Analysis screen: display of externally produced quality analysis.
//!
//! Everything shown here was computed by the external analyzer and arrived
//! through the comparison manifest; this screen renders it and nothing
//! more. Navigation drives the same shared pair cursor as the comparison
//! screen, so both screens always show the same pair.

pub mod histogram;

use crate::i18n::fluent::I18n;
use crate::manifest::{AnalysisReport, ImagePair, SideBySide};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use histogram::HistogramChart;
use iced::widget::canvas::Canvas;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Contextual data needed to render the analysis screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pair: Option<&'a ImagePair>,
    pub can_navigate: bool,
}

/// Messages emitted by the analysis screen.
#[derive(Debug, Clone)]
pub enum Message {
    NextPair,
    PreviousPair,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(pair) = ctx.pair else {
        return centered_hint(ctx.i18n.tr("analysis-empty"));
    };

    let title = Text::new(&pair.name).size(typography::TITLE_SM);

    let body: Element<'a, Message> = match &pair.analysis {
        Some(analysis) => view_report(ctx.i18n, analysis),
        None => centered_hint(ctx.i18n.tr("analysis-missing")),
    };

    let previous_button = button(Text::new(ctx.i18n.tr("comparison-previous")))
        .on_press_maybe(ctx.can_navigate.then_some(Message::PreviousPair))
        .padding([6, 12])
        .style(styles::button::primary);

    let next_button = button(Text::new(ctx.i18n.tr("comparison-next")))
        .on_press_maybe(ctx.can_navigate.then_some(Message::NextPair))
        .padding([6, 12])
        .style(styles::button::primary);

    let navigation_row = Row::new()
        .push(previous_button)
        .push(Space::with_width(Length::Fill))
        .push(next_button);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(body)
        .push(navigation_row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_report<'a>(i18n: &'a I18n, analysis: &'a AnalysisReport) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);

    if !analysis.histogram.is_empty() {
        let chart = Canvas::new(HistogramChart::new(&analysis.histogram))
            .width(Length::Fill)
            .height(Length::Fixed(260.0));

        let legend = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(legend_entry(
                i18n.tr("analysis-original"),
                palette::SERIES_ORIGINAL,
            ))
            .push(legend_entry(
                i18n.tr("analysis-upscaled"),
                palette::SERIES_UPSCALED,
            ));

        column = column
            .push(Text::new(i18n.tr("analysis-histogram-title")).size(typography::BODY))
            .push(chart)
            .push(legend);
    }

    let mut metrics = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("analysis-metrics-title")).size(typography::BODY))
        .push(metric_row(i18n.tr("analysis-psnr"), format!("{:.2} dB", analysis.psnr)))
        .push(metric_row(i18n.tr("analysis-ssim"), format!("{:.4}", analysis.ssim)))
        .push(metric_row(
            i18n.tr("analysis-edge-quality"),
            format!("{:.3}", analysis.edge_quality),
        ));

    if let Some(noise) = analysis.noise_level {
        metrics = metrics.push(side_by_side_row(i18n, "analysis-noise-level", noise));
    }
    if let Some(sharpness) = analysis.texture_sharpness {
        metrics = metrics.push(side_by_side_row(
            i18n,
            "analysis-texture-sharpness",
            sharpness,
        ));
    }

    column = column.push(
        Container::new(metrics)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::panel),
    );

    column.into()
}

fn metric_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .push(Text::new(label).size(typography::CAPTION))
        .push(Space::with_width(Length::Fill))
        .push(Text::new(value).size(typography::CAPTION))
        .into()
}

fn side_by_side_row<'a>(i18n: &I18n, key: &str, values: SideBySide) -> Element<'a, Message> {
    let value = i18n.tr_args(
        "analysis-side-by-side",
        &[
            ("original", format!("{:.2}", values.original)),
            ("upscaled", format!("{:.2}", values.upscaled)),
        ],
    );
    metric_row(i18n.tr(key), value)
}

fn legend_entry<'a>(label: String, color: Color) -> Element<'a, Message> {
    let swatch = Container::new(Space::new(
        Length::Fixed(12.0),
        Length::Fixed(12.0),
    ))
    .style(move |_theme: &iced::Theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::CHART_SERIES,
            ..color
        })),
        ..iced::widget::container::Style::default()
    });

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(swatch)
        .push(Text::new(label).size(typography::CAPTION))
        .into()
}

fn centered_hint<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_view_renders_without_pair() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            pair: None,
            can_navigate: false,
        });
    }
}
