// SPDX-License-Identifier: MPL-2.0
//! Intensity histogram chart for the analysis screen.
//!
//! Draws the original and upscaled distributions as overlaid vertical bars,
//! normalized to the tallest bin across both series.

use crate::manifest::HistogramBin;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

/// Histogram chart over externally supplied bins.
#[derive(Debug, Clone)]
pub struct HistogramChart<'a> {
    bins: &'a [HistogramBin],
}

impl<'a> HistogramChart<'a> {
    #[must_use]
    pub fn new(bins: &'a [HistogramBin]) -> Self {
        Self { bins }
    }

    fn max_count(&self) -> f64 {
        self.bins
            .iter()
            .flat_map(|bin| [bin.original, bin.upscaled])
            .fold(0.0_f64, f64::max)
    }
}

impl<Message> canvas::Program<Message> for HistogramChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let max_count = self.max_count();
        if self.bins.is_empty() || max_count <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let width = bounds.width;
        let height = bounds.height;
        let bar_width = width / self.bins.len() as f32;

        let series = [
            (
                (|bin: &HistogramBin| bin.original) as fn(&HistogramBin) -> f64,
                palette::SERIES_ORIGINAL,
            ),
            (
                (|bin: &HistogramBin| bin.upscaled) as fn(&HistogramBin) -> f64,
                palette::SERIES_UPSCALED,
            ),
        ];

        for (value_of, color) in series {
            let mut builder = canvas::path::Builder::new();

            for (i, bin) in self.bins.iter().enumerate() {
                let count = value_of(bin);
                if count > 0.0 {
                    let normalized = (count / max_count) as f32;
                    let x = i as f32 * bar_width + bar_width / 2.0;
                    builder.move_to(Point::new(x, height));
                    builder.line_to(Point::new(x, height - normalized * height));
                }
            }

            let path = builder.build();
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(Color {
                        a: opacity::CHART_SERIES,
                        ..color
                    })
                    .with_width(bar_width.max(1.0)),
            );
        }

        // Baseline
        let baseline = Path::line(Point::new(0.0, height), Point::new(width, height));
        frame.stroke(
            &baseline,
            Stroke::default()
                .with_color(palette::GRAY_400)
                .with_width(1.0),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins(values: &[(f64, f64)]) -> Vec<HistogramBin> {
        values
            .iter()
            .enumerate()
            .map(|(i, (original, upscaled))| HistogramBin {
                value: i as u32,
                original: *original,
                upscaled: *upscaled,
            })
            .collect()
    }

    #[test]
    fn max_count_spans_both_series() {
        let bins = bins(&[(10.0, 4.0), (3.0, 25.0), (7.0, 7.0)]);
        let chart = HistogramChart::new(&bins);
        assert_eq!(chart.max_count(), 25.0);
    }

    #[test]
    fn max_count_of_empty_histogram_is_zero() {
        let chart = HistogramChart::new(&[]);
        assert_eq!(chart.max_count(), 0.0);
    }
}
